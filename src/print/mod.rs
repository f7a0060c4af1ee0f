//! # Print Trigger
//!
//! A one-shot, fire-and-forget request to print, issued a fixed delay after
//! the receipt is rendered. The delay gives the remote logo time to paint
//! before the print snapshot; it is a heuristic, not a guarantee.
//!
//! ## State Machine
//!
//! ```text
//! Idle ──schedule──► Scheduled ──timer──► Triggered
//!                        │
//!                        └──cancel/drop──► Cancelled
//! ```
//!
//! There is no way back to `Idle`, and `Triggered` and `Cancelled` are
//! mutually exclusive: the transition out of `Scheduled` is a single atomic
//! compare-and-swap.
//!
//! ## Two Sides
//!
//! - [`browser_script`]: the page-side trigger embedded in every rendered
//!   receipt (`window.print()` after the delay, timer cleared on `pagehide`).
//! - [`PrintTrigger`]: the same contract for server-side actions such as
//!   the CLI's `print` command, which hands the rendered file to a system
//!   print command ([`CommandAction`]).

mod command;
mod script;
mod trigger;

pub use command::CommandAction;
pub use script::browser_script;
pub use trigger::{PrintHandle, PrintTrigger, TriggerState};

use async_trait::async_trait;

use crate::error::ReceiptError;

/// The action a [`PrintTrigger`] fires.
#[async_trait]
pub trait PrintAction: Send + Sync + 'static {
    /// Invoke the print action. Called at most once per trigger.
    async fn fire(&self) -> Result<(), ReceiptError>;
}
