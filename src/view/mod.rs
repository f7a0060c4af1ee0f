//! # Receipt View
//!
//! Pure function from an [`AdvisoryRecord`] to a receipt component tree.
//!
//! Both layouts share the same record and the same header, title and footer;
//! they differ only in how the body is laid out:
//!
//! | | Label | Roll |
//! |---|---|---|
//! | Paper | 80mm x 120mm, clipped | 80mm, grows |
//! | Receipt id | last 6 characters | full |
//! | Symptoms / notes | one comma-joined line each, shared box | one line per entry, own sections |
//! | Treatment | compact table | one bordered block per component |
//!
//! ## Example
//!
//! ```
//! use advisory_receipt::advisory::AdvisoryRecord;
//! use advisory_receipt::components::ComponentExt;
//! use advisory_receipt::view::{self, Branding, Layout};
//!
//! let record = AdvisoryRecord::empty("ADV-1".into(), "19/10/2026, 3:45:30 pm".into());
//! let receipt = view::render(&record, Layout::Roll, &Branding::default());
//!
//! let ir = receipt.compile();
//! assert!(ir.has_class("header"));
//! assert!(ir.has_class("footer"));
//! assert!(!ir.has_class("treatment"));
//! ```

mod label;
mod roll;
mod sections;

use crate::advisory::AdvisoryRecord;
use crate::components::Receipt;
use crate::paper::PaperConfig;

/// Logo shown in the receipt header.
pub const DEFAULT_LOGO_URL: &str = "https://kiosk.cropsync.in/logo_v.jpeg";

/// First footer line.
pub const DEFAULT_THANK_YOU: &str = "Thank You for Using CropSync Kiosk";

/// Second footer line.
pub const DEFAULT_CONTACT: &str = "www.cropsync.in | +91-91828 67605";

/// The two physical receipt form factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Fixed 80mm x 120mm label.
    #[default]
    Label,
    /// Variable-length 80mm roll.
    Roll,
}

impl Layout {
    /// Short name, also used as the receipt's CSS class.
    pub fn name(self) -> &'static str {
        match self {
            Layout::Label => "label",
            Layout::Roll => "roll",
        }
    }

    /// The paper this layout prints on.
    pub fn paper(self) -> PaperConfig {
        match self {
            Layout::Label => PaperConfig::LABEL_80X120,
            Layout::Roll => PaperConfig::ROLL_80,
        }
    }

    /// Parse a layout name (CLI args).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "label" => Ok(Layout::Label),
            "roll" => Ok(Layout::Roll),
            _ => Err(format!("Unknown layout '{}'. Use 'label' or 'roll'", s)),
        }
    }

    /// All layouts.
    pub fn all() -> [Layout; 2] {
        [Layout::Label, Layout::Roll]
    }
}

/// Kiosk branding printed on every receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub logo_url: String,
    pub thank_you: String,
    pub contact: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_string(),
            thank_you: DEFAULT_THANK_YOU.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
        }
    }
}

/// Render a record with the chosen layout.
///
/// Total over every record, including the all-defaults one.
pub fn render(record: &AdvisoryRecord, layout: Layout, branding: &Branding) -> Receipt {
    match layout {
        Layout::Label => label::render(record, branding),
        Layout::Roll => roll::render(record, branding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_parse() {
        assert_eq!(Layout::parse("label"), Ok(Layout::Label));
        assert_eq!(Layout::parse("ROLL"), Ok(Layout::Roll));
        assert!(Layout::parse("a4").is_err());
    }

    #[test]
    fn test_layout_paper() {
        assert_eq!(Layout::Label.paper(), PaperConfig::LABEL_80X120);
        assert_eq!(Layout::Roll.paper(), PaperConfig::ROLL_80);
        assert_eq!(Layout::default(), Layout::Label);
    }

    #[test]
    fn test_names_round_trip() {
        for layout in Layout::all() {
            assert_eq!(Layout::parse(layout.name()), Ok(layout));
        }
    }
}
