//! # Paper Configuration
//!
//! This module defines the paper form factors the receipt view supports.
//!
//! ## Supported Paper
//!
//! | Form factor | Width | Height | Overflow |
//! |-------------|-------|--------|----------|
//! | Label | 80mm | 120mm | clipped |
//! | Roll | 80mm | auto | grows |
//!
//! ## Usage
//!
//! ```
//! use advisory_receipt::paper::PaperConfig;
//!
//! let paper = PaperConfig::LABEL_80X120;
//! assert_eq!(paper.page_size(), "80mm 120mm");
//! assert_eq!(PaperConfig::ROLL_80.page_size(), "80mm auto");
//! ```

/// # Paper Configuration
///
/// Defines the physical characteristics of one paper form factor.
///
/// ## Print Area
///
/// ```text
/// ├─ 4mm ─┼────── 72mm content ──────┼─ 4mm ─┤
/// │ pad   │                          │  pad  │
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperConfig {
    /// Form factor name
    pub name: &'static str,

    /// Paper width in millimeters
    pub width_mm: f32,

    /// Paper height in millimeters. `None` means the page grows with content.
    pub height_mm: Option<f32>,

    /// Padding inside the receipt container on every side
    pub padding_mm: f32,
}

impl PaperConfig {
    /// # Fixed 80mm x 120mm Label
    ///
    /// Content must fit the canvas; anything past 120mm is clipped.
    pub const LABEL_80X120: Self = Self {
        name: "80mm x 120mm label",
        width_mm: 80.0,
        height_mm: Some(120.0),
        padding_mm: 4.0,
    };

    /// # 80mm Roll
    ///
    /// Continuous paper; the page is as long as the content.
    pub const ROLL_80: Self = Self {
        name: "80mm roll",
        width_mm: 80.0,
        height_mm: None,
        padding_mm: 4.0,
    };

    /// Whether the page height is fixed (overflow is clipped).
    #[inline]
    pub fn is_fixed_height(&self) -> bool {
        self.height_mm.is_some()
    }

    /// CSS width, e.g. `80mm`
    pub fn css_width(&self) -> String {
        css_mm(self.width_mm)
    }

    /// CSS height, e.g. `120mm`, or `auto` for rolls
    pub fn css_height(&self) -> String {
        self.height_mm.map(css_mm).unwrap_or_else(|| "auto".to_string())
    }

    /// Value for the `@page { size: ... }` rule
    pub fn page_size(&self) -> String {
        format!("{} {}", self.css_width(), self.css_height())
    }
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self::LABEL_80X120
    }
}

/// Format millimeters without a trailing `.0` for whole values.
fn css_mm(mm: f32) -> String {
    if mm.fract() == 0.0 {
        format!("{}mm", mm as i32)
    } else {
        format!("{}mm", mm)
    }
}

// ============================================================================
// TESTS
// ============================================================================
