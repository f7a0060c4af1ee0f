//! # Declarative Components
//!
//! React-like components for building receipt markup declaratively.
//!
//! ## Design Philosophy
//!
//! Instead of concatenating HTML strings, you describe *what* you want:
//!
//! ```
//! use advisory_receipt::components::*;
//!
//! let receipt = Receipt::new("label")
//!     .child(Block::new("header").child(Text::new("19/10/2026, 3:45:30 pm")))
//!     .child(Text::block("Leaf Blight").class("problem-title"))
//!     .child(Labeled::new("Category:", "Fungal"));
//!
//! // Compile to IR (inspectable)
//! let ir = receipt.compile();
//! assert!(ir.has_class("problem-title"));
//!
//! // Generate HTML
//! let html = receipt.build();
//! assert!(html.starts_with(r#"<div id="receipt-container""#));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which emits IR ops.
//! Components can be nested (containers hold children).

mod graphics;
mod layout;
mod receipt;
mod table;
mod text;

pub use graphics::*;
pub use layout::*;
pub use receipt::*;
pub use table::*;
pub use text::*;

use crate::ir::{Op, Program};

/// Trait for declarative components.
///
/// Components emit IR ops when compiled. This is the core abstraction
/// that enables the declarative receipt building pattern.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program.
    fn compile(&self) -> Program {
        let mut ops = Vec::new();
        self.emit(&mut ops);
        Program { ops }
    }

    /// Compile, optimize, and generate HTML.
    fn build(&self) -> String {
        self.compile().optimize().to_html()
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.as_ref().emit(ops);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ops: &mut Vec<Op>) {
        (*self).emit(ops);
    }
}

// Optional children render nothing when absent
impl<T: Component> Component for Option<T> {
    fn emit(&self, ops: &mut Vec<Op>) {
        if let Some(inner) = self {
            inner.emit(ops);
        }
    }
}
