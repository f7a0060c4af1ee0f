//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for receipt markup.
//! The IR is a flat sequence of opcodes that can be inspected, optimized, and
//! compiled to HTML.
//!
//! ## Design Philosophy
//!
//! The IR sits between declarative components and the HTML page:
//!
//! ```text
//! Components → IR (inspectable) → Optimizer → Codegen → HTML
//! ```
//!
//! Element boundaries are individual ops (`Open` / `Close`) rather than a
//! tree, so tests can scan a program for a section without walking nodes.

/// HTML elements the receipt uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Span,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
}

impl Tag {
    /// The element name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
        }
    }
}

/// IR opcodes - the "bytecode" for receipt markup.
///
/// Each variant represents a single atomic operation. The IR can be:
/// - Inspected for debugging (`{:#?}`)
/// - Optimized to merge adjacent text and drop empty spans
/// - Compiled to HTML
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Structure ==========
    /// Open an element.
    Open {
        tag: Tag,
        id: Option<String>,
        class: Option<String>,
    },

    /// Close the most recently opened element of this tag.
    Close(Tag),

    // ========== Content ==========
    /// Text content. Escaped by codegen.
    Text(String),

    /// An image.
    Image {
        src: String,
        alt: String,
        class: Option<String>,
    },
}

impl Op {
    /// Open an element with a class.
    pub fn open(tag: Tag, class: impl Into<String>) -> Self {
        Op::Open {
            tag,
            id: None,
            class: Some(class.into()),
        }
    }

    /// Open an element with no attributes.
    pub fn open_plain(tag: Tag) -> Self {
        Op::Open {
            tag,
            id: None,
            class: None,
        }
    }

    /// Whether this op opens an element with the given class.
    pub fn opens_class(&self, name: &str) -> bool {
        match self {
            Op::Open {
                class: Some(class), ..
            } => class.split_whitespace().any(|c| c == name),
            _ => false,
        }
    }
}

/// A compiled IR program.
///
/// Contains a sequence of ops that can be optimized and compiled to HTML.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Whether any element carries the given class.
    pub fn has_class(&self, name: &str) -> bool {
        self.ops.iter().any(|op| op.opens_class(name))
    }

    /// All text content, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(Op::open(Tag::Div, "header"));
        program.push(Op::Text("Hello".into()));
        program.push(Op::Close(Tag::Div));
        assert_eq!(program.len(), 3);
        assert!(program.has_class("header"));
        assert!(!program.has_class("footer"));
        assert_eq!(program.texts(), vec!["Hello"]);
    }

    #[test]
    fn test_opens_class_multiple() {
        let op = Op::open(Tag::Div, "section treatment");
        assert!(op.opens_class("section"));
        assert!(op.opens_class("treatment"));
        assert!(!op.opens_class("treat"));
        assert!(!Op::open_plain(Tag::Tr).opens_class("section"));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(Tag::Div.name(), "div");
        assert_eq!(Tag::Thead.name(), "thead");
        assert_eq!(Tag::Td.name(), "td");
    }
}
