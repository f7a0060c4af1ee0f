//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for receipt markup. The IR is a
//! "bytecode" representation that sits between declarative components
//! and the HTML handed to the browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ Components  │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │(declarative)│     │  (Vec<Op>)  │     │           │     │  (HTML)  │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use advisory_receipt::ir::{Op, Program, Tag};
//!
//! let mut program = Program::new();
//! program.push(Op::open(Tag::Div, "title"));
//! program.push(Op::Text("Leaf ".into()));
//! program.push(Op::Text("Blight".into()));
//! program.push(Op::Close(Tag::Div));
//!
//! let html = program.optimize().to_html();
//! assert_eq!(html, r#"<div class="title">Leaf Blight</div>"#);
//! ```

mod codegen;
mod ops;
mod optimize;

pub use codegen::escape;
pub use ops::*;
