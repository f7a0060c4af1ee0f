//! # Text Components
//!
//! Components for displaying text.

use super::Component;
use crate::ir::{Op, Tag};

/// A text component: inline (`<span>`) or block (`<div>`), with an
/// optional class.
///
/// ## Example
///
/// ```
/// use advisory_receipt::components::*;
///
/// // Inline text
/// let text = Text::new("Hello");
/// assert_eq!(text.build(), "<span>Hello</span>");
///
/// // Block text with a class
/// let title = Text::block("Leaf Blight").class("problem-title");
/// assert_eq!(title.build(), r#"<div class="problem-title">Leaf Blight</div>"#);
/// ```
pub struct Text {
    content: String,
    block: bool,
    class: Option<String>,
}

impl Text {
    /// Create inline text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            block: false,
            class: None,
        }
    }

    /// Create text on its own line.
    pub fn block(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            block: true,
            class: None,
        }
    }

    /// Set the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Mark the text as Telugu script (uses the Telugu font stack).
    pub fn telugu(mut self) -> Self {
        self.class = Some(match self.class.take() {
            Some(class) => format!("{} te", class),
            None => "te".to_string(),
        });
        self
    }
}

impl Component for Text {
    fn emit(&self, ops: &mut Vec<Op>) {
        let tag = if self.block { Tag::Div } else { Tag::Span };
        ops.push(Op::Open {
            tag,
            id: None,
            class: self.class.clone(),
        });
        ops.push(Op::Text(self.content.clone()));
        ops.push(Op::Close(tag));
    }
}

/// A label followed by its value on one line.
///
/// ```text
/// Category: Fungal
/// ```
pub struct Labeled {
    label: String,
    value: String,
    class: String,
    value_class: Option<String>,
}

impl Labeled {
    /// Create a labeled value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            class: "info-item".to_string(),
            value_class: None,
        }
    }

    /// Set the row class (default `info-item`).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Render the value in Telugu script.
    pub fn telugu(mut self) -> Self {
        self.value_class = Some("te".to_string());
        self
    }
}

impl Component for Labeled {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::open(Tag::Div, self.class.clone()));
        ops.push(Op::open(Tag::Span, "label"));
        ops.push(Op::Text(self.label.clone()));
        ops.push(Op::Close(Tag::Span));
        match &self.value_class {
            Some(class) => {
                ops.push(Op::open(Tag::Span, class.clone()));
                ops.push(Op::Text(self.value.clone()));
                ops.push(Op::Close(Tag::Span));
            }
            None => ops.push(Op::Text(self.value.clone())),
        }
        ops.push(Op::Close(Tag::Div));
    }
}

/// One block per line of text.
///
/// ## Example
///
/// ```
/// use advisory_receipt::components::*;
///
/// let lines = Lines::new(["yellow leaves", "brown spots"]).class("line");
/// assert_eq!(
///     lines.build(),
///     r#"<div class="line">yellow leaves</div><div class="line">brown spots</div>"#
/// );
/// ```
pub struct Lines {
    lines: Vec<String>,
    class: String,
}

impl Lines {
    /// Create from any sequence of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            class: "line".to_string(),
        }
    }

    /// Set the per-line class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Lines {
    fn emit(&self, ops: &mut Vec<Op>) {
        for line in &self.lines {
            Text::block(line.clone()).class(self.class.clone()).emit(ops);
        }
    }
}
