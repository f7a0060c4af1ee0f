//! Variable-length 80mm roll.
//!
//! Content flows and the page grows to fit. Each part of the advisory is its
//! own section and is left out when there is nothing to show.

use super::Branding;
use super::sections::{footer, header, problem};
use crate::advisory::{AdvisoryRecord, PLACEHOLDER, TreatmentComponent};
use crate::components::{Block, Labeled, Lines, Receipt, Section};

pub(super) fn render(record: &AdvisoryRecord, branding: &Branding) -> Receipt {
    Receipt::new("roll")
        .child(header(record, branding, &record.receipt_id))
        .child(problem(record))
        .child(lines_section("Symptoms", "symptoms", record.symptom_lines()))
        .child(lines_section("Advisory", "advisory", record.note_lines()))
        .child(treatment(record))
        .child(footer(branding))
}

fn lines_section(title: &str, class: &str, lines: Vec<&str>) -> Option<Section> {
    if lines.is_empty() {
        return None;
    }
    Some(Section::new(title, class).child(Lines::new(lines).class("line te")))
}

fn treatment(record: &AdvisoryRecord) -> Option<Section> {
    if record.components.is_empty() {
        return None;
    }
    Some(
        Section::new("Recommended Treatment", "treatment")
            .children(record.components.iter().map(treatment_item)),
    )
}

/// One bordered block per component.
fn treatment_item(c: &TreatmentComponent) -> Block {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| PLACEHOLDER.to_string());

    Block::new("treatment-item")
        .child(Labeled::new("Type:", field(&c.component_type)))
        .child(Labeled::new("Name:", field(&c.component_name_te)).telugu())
        .child(Labeled::new("Dose:", field(&c.dose_te)).telugu())
        .child(Labeled::new("Method:", field(&c.application_method_te)).telugu())
        .child(
            c.notes_te
                .clone()
                .filter(|n| !n.trim().is_empty())
                .map(|n| Labeled::new("Note:", n).class("info-item component-note").telugu()),
        )
}
