//! # Graphics Components
//!
//! Images loaded by the browser (the brand logo).

use super::Component;
use crate::ir::Op;

/// A remote image.
///
/// The image is fetched by the browser, not by this crate; the print delay
/// exists to give it time to paint.
pub struct Image {
    src: String,
    alt: String,
    class: Option<String>,
}

impl Image {
    /// Create an image from a URL.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            class: None,
        }
    }

    /// Set the alt text.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Set the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Image {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Image {
            src: self.src.clone(),
            alt: self.alt.clone(),
            class: self.class.clone(),
        });
    }
}
