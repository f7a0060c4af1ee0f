//! # Page Assembly
//!
//! Wraps a rendered receipt in a complete HTML document: screen styles for
//! the chosen layout, a print stylesheet sized to the paper, and the
//! page-side print trigger.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use advisory_receipt::page::{self, PageOptions};
//! use advisory_receipt::view::Layout;
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 30).unwrap();
//! let html = page::render_query("?category=Fungal", Layout::Label, now, &PageOptions::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("size: 80mm 120mm;"));
//! assert!(html.contains("Fungal"));
//! assert!(html.contains("window.print()"));
//! ```

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::advisory::AdvisoryRecord;
use crate::components::{ComponentExt, RECEIPT_CONTAINER_ID};
use crate::ir::escape;
use crate::paper::PaperConfig;
use crate::print::{PrintTrigger, browser_script};
use crate::query;
use crate::view::{self, Branding, Layout};

/// How a page is wrapped around the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub branding: Branding,
    /// Delay before the browser print dialog opens. `None` disables
    /// auto-print (preview mode).
    pub print_delay: Option<Duration>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            branding: Branding::default(),
            print_delay: Some(PrintTrigger::DEFAULT_DELAY),
        }
    }
}

/// Decode a query string and render the full page.
///
/// The whole pipeline is a pure function of `(query, now)`.
pub fn render_query(query: &str, layout: Layout, now: DateTime<Utc>, options: &PageOptions) -> String {
    let record = query::decode(query, now);
    render_page(&record, layout, options)
}

/// Render a decoded record as a complete HTML document.
pub fn render_page(record: &AdvisoryRecord, layout: Layout, options: &PageOptions) -> String {
    let receipt = view::render(record, layout, &options.branding).build();
    let paper = layout.paper();
    let layout_css = match layout {
        Layout::Label => LABEL_CSS,
        Layout::Roll => ROLL_CSS,
    };
    let script = options.print_delay.map(browser_script).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="te">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {receipt_id}</title>
    <style>{base}{layout_css}</style>
    <style media="print">{print}</style>
</head>
<body>
{receipt}
{script}
</body>
</html>"#,
        title = escape(record.title()),
        receipt_id = escape(&record.receipt_id),
        base = BASE_CSS,
        layout_css = layout_css,
        print = print_css(&paper),
        receipt = receipt,
        script = script,
    )
}

/// Print stylesheet: pin the page to the paper and hide everything but the
/// receipt container.
pub fn print_css(paper: &PaperConfig) -> String {
    let width = paper.css_width();
    let height = paper.css_height();
    let (position, overflow) = if paper.is_fixed_height() {
        ("fixed", "hidden")
    } else {
        ("absolute", "visible")
    };

    format!(
        r#"
    @page {{
        size: {size};
        margin: 0mm;
    }}

    html, body {{
        width: {width} !important;
        height: {height} !important;
        margin: 0 !important;
        padding: 0 !important;
        background-color: white;
    }}

    body * {{
        visibility: hidden;
        height: 0;
    }}

    #{id}, #{id} * {{
        visibility: visible;
        height: auto;
    }}

    #{id} {{
        position: {position};
        left: 0;
        top: 0;
        width: {width} !important;
        height: {height} !important;
        margin: 0 !important;
        padding: {padding}mm !important;
        box-sizing: border-box;
        overflow: {overflow};
    }}
"#,
        size = paper.page_size(),
        width = width,
        height = height,
        id = RECEIPT_CONTAINER_ID,
        position = position,
        overflow = overflow,
        padding = paper.padding_mm,
    )
}

/// Styles shared by both layouts.
const BASE_CSS: &str = r#"
    .receipt {
        width: 80mm;
        margin: 0 auto;
        padding: 4mm;
        font-family: 'Roboto', 'Noto Sans Telugu', sans-serif;
        font-size: 10px;
        line-height: 1.2;
        color: #333;
        background-color: #fff;
        box-sizing: border-box;
    }

    .te {
        font-family: 'Noto Sans Telugu', sans-serif;
    }

    .header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        border-bottom: 2px solid #2c3e50;
        padding-bottom: 4px;
        margin-bottom: 4px;
    }

    .logo-section {
        display: flex;
        align-items: center;
        gap: 6px;
    }

    .logo {
        height: 32px;
        width: auto;
    }

    .header-right {
        text-align: right;
        font-size: 8px;
        color: #555;
    }

    .problem {
        margin-bottom: 6px;
    }

    .problem-title {
        font-size: 12px;
        font-weight: 700;
        color: #e74c3c;
        margin-bottom: 2px;
    }

    .grid-two {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4px;
        margin-bottom: 4px;
    }

    .info-item {
        font-size: 9px;
    }

    .label {
        font-weight: 600;
        color: #7f8c8d;
        margin-right: 3px;
    }

    .section-title {
        font-size: 10px;
        font-weight: 700;
        color: #2c3e50;
        border-bottom: 1px solid #eee;
        margin-top: 4px;
        margin-bottom: 2px;
        padding-bottom: 1px;
        text-transform: uppercase;
    }

    .footer {
        text-align: center;
        border-top: 1px dashed #ccc;
        padding-top: 4px;
        font-size: 8px;
        color: #7f8c8d;
    }

    .footer .thanks {
        font-weight: 700;
        margin-bottom: 2px;
    }
"#;

/// Fixed label: header/body/footer column, footer pinned, overflow clipped.
const LABEL_CSS: &str = r#"
    .receipt.label {
        height: 120mm;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        overflow: hidden;
    }

    .label .body {
        flex: 1;
    }

    .label .footer {
        margin-top: auto;
    }

    .observations {
        margin-bottom: 6px;
        background-color: #f9f9f9;
        padding: 4px;
        border-radius: 4px;
    }

    .observation {
        margin-bottom: 2px;
    }

    .treatment-table {
        width: 100%;
        border-collapse: collapse;
        margin-top: 4px;
        font-size: 9px;
    }

    .treatment-table th {
        text-align: left;
        border-bottom: 1px solid #333;
        padding: 2px;
        font-weight: 700;
        color: #2c3e50;
    }

    .treatment-table td {
        border-bottom: 1px solid #eee;
        padding: 3px 2px;
        vertical-align: top;
    }

    .treatment-table th.col-type { width: 25%; }
    .treatment-table th.col-name { width: 35%; }
    .treatment-table th.col-dose { width: 20%; }
    .treatment-table th.col-method { width: 20%; }
    .treatment-table td.col-name { font-weight: 600; }
"#;

/// Roll: natural flow, page grows with content.
const ROLL_CSS: &str = r#"
    .receipt.roll {
        height: auto;
    }

    .section {
        margin-bottom: 6px;
    }

    .section .line {
        font-size: 10px;
        margin-bottom: 1px;
    }

    .treatment-item {
        border: 1px solid #ccc;
        border-radius: 4px;
        padding: 4px;
        margin-top: 4px;
    }

    .component-note {
        font-style: italic;
    }

    .roll .footer {
        margin-top: 8px;
    }
"#;
