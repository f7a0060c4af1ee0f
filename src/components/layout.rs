//! # Layout Components
//!
//! Containers that group other components.

use super::Component;
use crate::ir::{Op, Tag};

/// A `<div>` container with a class and child components.
///
/// ## Example
///
/// ```
/// use advisory_receipt::components::*;
///
/// let grid = Block::new("grid-two")
///     .child(Labeled::new("Category:", "Fungal"))
///     .child(Labeled::new("Stage:", "Flowering"));
///
/// assert_eq!(
///     grid.build(),
///     concat!(
///         r#"<div class="grid-two">"#,
///         r#"<div class="info-item"><span class="label">Category:</span>Fungal</div>"#,
///         r#"<div class="info-item"><span class="label">Stage:</span>Flowering</div>"#,
///         "</div>",
///     )
/// );
/// ```
pub struct Block {
    class: String,
    children: Vec<Box<dyn Component>>,
}

impl Block {
    /// Create an empty block.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            children: Vec::new(),
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }
}

impl Component for Block {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::open(Tag::Div, self.class.clone()));
        for child in &self.children {
            child.emit(ops);
        }
        ops.push(Op::Close(Tag::Div));
    }
}

/// A titled section: a heading followed by its content.
///
/// Used by the roll layout, where each part of the advisory is its own
/// section and absent sections are skipped entirely.
pub struct Section {
    title: String,
    class: String,
    body: Vec<Box<dyn Component>>,
}

impl Section {
    /// Create a section with a heading.
    pub fn new(title: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            class: class.into(),
            body: Vec::new(),
        }
    }

    /// Add a child component below the heading.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.body.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.body.push(Box::new(c));
        }
        self
    }
}

impl Component for Section {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::open(Tag::Div, format!("section {}", self.class)));
        ops.push(Op::open(Tag::Div, "section-title"));
        ops.push(Op::Text(self.title.clone()));
        ops.push(Op::Close(Tag::Div));
        for child in &self.body {
            child.emit(ops);
        }
        ops.push(Op::Close(Tag::Div));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentExt, Text};

    #[test]
    fn test_empty_block() {
        let block = Block::new("body");
        assert_eq!(block.build(), r#"<div class="body"></div>"#);
    }

    #[test]
    fn test_nested_blocks() {
        let block = Block::new("outer").child(Block::new("inner").child(Text::new("x")));
        assert_eq!(
            block.build(),
            r#"<div class="outer"><div class="inner"><span>x</span></div></div>"#
        );
    }

    #[test]
    fn test_section() {
        let section = Section::new("Symptoms", "symptoms")
            .children(["a", "b"].into_iter().map(Text::block));
        let ir = section.compile();
        assert!(ir.has_class("section"));
        assert!(ir.has_class("symptoms"));
        assert_eq!(ir.texts(), vec!["Symptoms", "a", "b"]);
    }
}
