//! # Receipt Component
//!
//! The root container for building receipts.

use super::Component;
use crate::ir::{Op, Tag};

/// Id of the root element. The print stylesheet hides everything else.
pub const RECEIPT_CONTAINER_ID: &str = "receipt-container";

/// Receipt is the root container component.
///
/// It renders `<div id="receipt-container" class="receipt {layout}">` around
/// its children.
///
/// ## Example
///
/// ```
/// use advisory_receipt::components::*;
///
/// let receipt = Receipt::new("roll")
///     .child(Text::block("Advisory").class("problem-title"));
///
/// assert_eq!(
///     receipt.build(),
///     r#"<div id="receipt-container" class="receipt roll"><div class="problem-title">Advisory</div></div>"#
/// );
/// ```
pub struct Receipt {
    layout: String,
    children: Vec<Box<dyn Component>>,
}

impl Receipt {
    /// Create a new empty receipt for the named layout.
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            children: Vec::new(),
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }
}

impl Component for Receipt {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Open {
            tag: Tag::Div,
            id: Some(RECEIPT_CONTAINER_ID.to_string()),
            class: Some(format!("receipt {}", self.layout)),
        });

        for child in &self.children {
            child.emit(ops);
        }

        ops.push(Op::Close(Tag::Div));
    }
}
