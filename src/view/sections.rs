//! Parts shared by both layouts.

use super::Branding;
use crate::advisory::AdvisoryRecord;
use crate::components::{Block, Image, Labeled, Text};

/// Logo on the left; render time and receipt id on the right.
pub(super) fn header(record: &AdvisoryRecord, branding: &Branding, receipt_id: &str) -> Block {
    Block::new("header")
        .child(
            Block::new("logo-section").child(Image::new(branding.logo_url.clone()).alt("Logo").class("logo")),
        )
        .child(
            Block::new("header-right")
                .child(Text::block(record.rendered_at.clone()).class("rendered-at"))
                .child(Text::block(format!("ID: {}", receipt_id)).class("receipt-id")),
        )
}

/// Problem title and the category/stage grid.
pub(super) fn problem(record: &AdvisoryRecord) -> Block {
    Block::new("problem")
        .child(Text::block(record.title()).class("problem-title").telugu())
        .child(
            Block::new("grid-two")
                .child(Labeled::new("Category:", record.category.clone()))
                .child(Labeled::new("Stage:", record.stage.clone())),
        )
}

pub(super) fn footer(branding: &Branding) -> Block {
    Block::new("footer")
        .child(Text::block(branding.thank_you.clone()).class("thanks"))
        .child(Text::block(branding.contact.clone()).class("contact"))
}
