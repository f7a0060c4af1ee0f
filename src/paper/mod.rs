//! # Paper Module
//!
//! This module provides the physical paper form factors receipts print on.
//!
//! ## Modules
//!
//! - [`config`]: Paper dimensions and print stylesheet geometry

pub mod config;

pub use config::PaperConfig;
