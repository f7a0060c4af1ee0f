//! Fixed 80mm x 120mm label.
//!
//! Header, a body that fills the remaining height, and a footer pinned to the
//! bottom. Everything has to fit: the stylesheet clips overflow.

use super::Branding;
use super::sections::{footer, header, problem};
use crate::advisory::AdvisoryRecord;
use crate::components::{Block, Column, Labeled, Receipt, Table, Text};

pub(super) fn render(record: &AdvisoryRecord, branding: &Branding) -> Receipt {
    Receipt::new("label")
        .child(header(record, branding, record.short_receipt_id()))
        .child(
            Block::new("body")
                .child(problem(record))
                .child(observations(record))
                .child(treatment_table(record)),
        )
        .child(footer(branding))
}

/// Symptoms and notes, each squeezed onto one comma-joined line.
fn observations(record: &AdvisoryRecord) -> Option<Block> {
    if !record.has_observations() {
        return None;
    }

    let symptoms = record.symptom_lines();
    let notes = record.note_lines();

    let symptoms = (!symptoms.is_empty())
        .then(|| Labeled::new("Symptoms:", symptoms.join(", ")).class("observation").telugu());
    let notes = (!notes.is_empty())
        .then(|| Labeled::new("Note:", notes.join(", ")).class("observation").telugu());

    Some(Block::new("observations").child(symptoms).child(notes))
}

fn treatment_table(record: &AdvisoryRecord) -> Option<Block> {
    if record.components.is_empty() {
        return None;
    }

    let mut table = Table::new("treatment-table")
        .column(Column::new("Type", "col-type"))
        .column(Column::new("Name", "col-name te"))
        .column(Column::new("Dose", "col-dose te"))
        .column(Column::new("Method", "col-method te"));

    for c in &record.components {
        table = table.row([
            c.component_type.clone().unwrap_or_default(),
            c.component_name_te.clone().unwrap_or_default(),
            c.dose_te.clone().unwrap_or_default(),
            c.application_method_te.clone().unwrap_or_default(),
        ]);
    }

    Some(
        Block::new("treatment")
            .child(Text::block("Recommended Treatment").class("section-title"))
            .child(table),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::TreatmentComponent;
    use crate::components::ComponentExt;
    use crate::ir::{Op, Tag};

    fn record() -> AdvisoryRecord {
        AdvisoryRecord::empty("ADV-1792404930000".into(), "19/10/2026, 3:45:30 pm".into())
    }

    #[test]
    fn test_empty_record() {
        let ir = render(&record(), &Branding::default()).compile();
        assert!(ir.has_class("header"));
        assert!(ir.has_class("body"));
        assert!(ir.has_class("footer"));
        assert!(!ir.has_class("observations"));
        assert!(!ir.has_class("treatment"));
        assert!(ir.texts().contains(&"ID: 930000"));
    }

    #[test]
    fn test_observations_comma_joined() {
        let mut r = record();
        r.symptoms_te = Some("పసుపు ఆకులు\nగోధుమ మచ్చలు".into());
        let ir = render(&r, &Branding::default()).compile();
        assert!(ir.has_class("observations"));
        assert!(ir.texts().contains(&"పసుపు ఆకులు, గోధుమ మచ్చలు"));
        assert!(ir.texts().contains(&"Symptoms:"));
        assert!(!ir.texts().contains(&"Note:"));
    }

    #[test]
    fn test_observations_keep_blank_entries() {
        let mut r = record();
        r.symptoms_te = Some("a\n\nb\n".into());
        let ir = render(&r, &Branding::default()).compile();
        assert!(ir.texts().contains(&"a, , b, "));
    }

    #[test]
    fn test_whitespace_only_note_is_shown() {
        let mut r = record();
        r.notes_te = Some(" ".into());
        let html = render(&r, &Branding::default()).build();
        assert!(html.contains(r#"<span class="label">Note:</span><span class="te"> </span>"#));
    }

    #[test]
    fn test_treatment_table_rows() {
        let mut r = record();
        r.components = vec![
            TreatmentComponent {
                component_type: Some("Fungicide".into()),
                component_name_te: Some("A".into()),
                dose_te: Some("5ml/L".into()),
                application_method_te: Some("Spray".into()),
                notes_te: Some("label layout ignores this".into()),
            },
            TreatmentComponent::default(),
        ];
        let ir = render(&r, &Branding::default()).compile();
        assert!(ir.has_class("treatment-table"));

        let rows = ir
            .iter()
            .filter(|op| **op == Op::open_plain(Tag::Tr))
            .count();
        // header row + two body rows
        assert_eq!(rows, 3);
        assert!(!ir.texts().contains(&"label layout ignores this"));
    }
}
