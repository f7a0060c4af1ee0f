//! # Advisory Receipt - Printable Crop Advisories
//!
//! Renders agricultural advisory "receipts" for 80mm receipt printers from
//! URL query-string parameters. It provides:
//!
//! - **Query decoding**: lenient, never-failing decoding into an [`AdvisoryRecord`]
//! - **Receipt view**: a fixed 80mm x 120mm label and a variable-length 80mm roll
//! - **Print trigger**: a one-shot, cancellable print after a short delay
//! - **HTTP server**: print-ready pages for kiosk browsers
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use advisory_receipt::{
//!     page::{self, PageOptions},
//!     query,
//!     view::Layout,
//! };
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 30).unwrap();
//!
//! // Decode the query string (never fails)
//! let record = query::decode("?problem_name_en=Blast&category=Fungal", now);
//! assert_eq!(record.title(), "Blast");
//!
//! // Render a print-ready page
//! let html = page::render_page(&record, Layout::Roll, &PageOptions::default());
//! assert!(html.contains("ID: ADV-1792404930000"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`query`] | Query-string decoding with silent fallbacks |
//! | [`advisory`] | The decoded record |
//! | [`view`] | Label and roll layouts |
//! | [`components`] | Declarative markup components |
//! | [`ir`] | Markup IR, optimizer and HTML codegen |
//! | [`page`] | Full HTML documents and print stylesheets |
//! | [`paper`] | Paper form factors |
//! | [`print`] | Print trigger (browser script and scheduled actions) |
//! | [`clock`] | Injectable clock and IST formatting |
//! | [`server`] | HTTP server |
//! | [`error`] | Error types |

pub mod advisory;
pub mod clock;
pub mod components;
pub mod error;
pub mod ir;
pub mod page;
pub mod paper;
pub mod print;
pub mod query;
pub mod server;
pub mod view;

// Re-exports for convenience
pub use advisory::{AdvisoryRecord, TreatmentComponent};
pub use error::ReceiptError;
pub use paper::PaperConfig;
pub use view::Layout;
