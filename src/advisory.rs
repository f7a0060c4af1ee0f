//! # Advisory Record
//!
//! The single, immutable value a receipt is rendered from. It is assembled
//! once per request by [`crate::query::decode`] and never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title used when neither problem name is present.
pub const DEFAULT_PROBLEM_NAME: &str = "Advisory";

/// Placeholder for absent category/stage.
pub const PLACEHOLDER: &str = "-";

/// Prefix of generated receipt ids.
pub const RECEIPT_ID_PREFIX: &str = "ADV-";

/// A crop-problem advisory, fully decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryRecord {
    pub problem_name_te: Option<String>,
    pub problem_name_en: String,
    pub category: String,
    pub stage: String,
    /// Newline-delimited symptom lines.
    pub symptoms_te: Option<String>,
    /// Newline-delimited advisory notes.
    pub notes_te: Option<String>,
    pub components: Vec<TreatmentComponent>,
    pub receipt_id: String,
    /// Render time, already formatted in IST.
    pub rendered_at: String,
}

impl AdvisoryRecord {
    /// The record a query string with no parameters decodes to.
    pub fn empty(receipt_id: String, rendered_at: String) -> Self {
        Self {
            problem_name_te: None,
            problem_name_en: DEFAULT_PROBLEM_NAME.to_string(),
            category: PLACEHOLDER.to_string(),
            stage: PLACEHOLDER.to_string(),
            symptoms_te: None,
            notes_te: None,
            components: Vec::new(),
            receipt_id,
            rendered_at,
        }
    }

    /// Telugu name when present, English otherwise.
    pub fn title(&self) -> &str {
        self.problem_name_te
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.problem_name_en)
    }

    /// The last six characters of the receipt id (label layout).
    pub fn short_receipt_id(&self) -> &str {
        let count = self.receipt_id.chars().count();
        match self.receipt_id.char_indices().nth(count.saturating_sub(6)) {
            Some((idx, _)) => &self.receipt_id[idx..],
            None => &self.receipt_id,
        }
    }

    /// Symptom lines, one per newline-delimited entry.
    pub fn symptom_lines(&self) -> Vec<&str> {
        split_lines(self.symptoms_te.as_deref())
    }

    /// Advisory note lines, one per newline-delimited entry.
    pub fn note_lines(&self) -> Vec<&str> {
        split_lines(self.notes_te.as_deref())
    }

    /// Whether any symptoms or notes are present.
    pub fn has_observations(&self) -> bool {
        present(self.symptoms_te.as_deref()) || present(self.notes_te.as_deref())
    }
}

fn present(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.is_empty())
}

/// Every entry is kept, blank ones included; only `\r` is trimmed.
fn split_lines(text: Option<&str>) -> Vec<&str> {
    match text {
        Some(t) if !t.is_empty() => t.split('\n').map(|line| line.trim_end_matches('\r')).collect(),
        _ => Vec::new(),
    }
}

/// One recommended treatment input (e.g. a fungicide) with dose and method.
///
/// Input is loosely structured: any field may be missing, and numbers are
/// kept as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentComponent {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_text")]
    pub component_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_text")]
    pub component_name_te: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_text")]
    pub dose_te: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_text")]
    pub application_method_te: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_text")]
    pub notes_te: Option<String>,
}

impl TreatmentComponent {
    /// Build a component from an arbitrary JSON array element.
    ///
    /// Anything that is not an object becomes an all-empty component.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Accept strings as-is and numbers as their JSON text. Booleans render as
/// nothing, like the other non-text values.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> AdvisoryRecord {
        AdvisoryRecord::empty("ADV-1760868930000".into(), "19/10/2026, 3:45:30 pm".into())
    }

    #[test]
    fn test_empty_record_defaults() {
        let r = record();
        assert_eq!(r.title(), "Advisory");
        assert_eq!(r.category, "-");
        assert_eq!(r.stage, "-");
        assert!(r.components.is_empty());
        assert!(!r.has_observations());
    }

    #[test]
    fn test_title_prefers_telugu() {
        let mut r = record();
        r.problem_name_en = "Leaf Blight".into();
        assert_eq!(r.title(), "Leaf Blight");
        r.problem_name_te = Some("ఆకు మచ్చ".into());
        assert_eq!(r.title(), "ఆకు మచ్చ");
        r.problem_name_te = Some(String::new());
        assert_eq!(r.title(), "Leaf Blight");
    }

    #[test]
    fn test_short_receipt_id() {
        let mut r = record();
        assert_eq!(r.short_receipt_id(), "930000");
        r.receipt_id = "AB12".into();
        assert_eq!(r.short_receipt_id(), "AB12");
        r.receipt_id = "రసీదు-సంఖ్య".into();
        assert_eq!(r.short_receipt_id().chars().count(), 6);
    }

    #[test]
    fn test_lines_keep_blank_entries() {
        let mut r = record();
        r.symptoms_te = Some("yellow leaves\r\n\nbrown spots\n".into());
        assert_eq!(r.symptom_lines(), vec!["yellow leaves", "", "brown spots", ""]);
        assert!(r.note_lines().is_empty());
        assert!(r.has_observations());
    }

    #[test]
    fn test_whitespace_only_value_is_present() {
        let mut r = record();
        r.notes_te = Some(" ".into());
        assert_eq!(r.note_lines(), vec![" "]);
        assert!(r.has_observations());

        r.notes_te = Some(String::new());
        assert!(r.note_lines().is_empty());
        assert!(!r.has_observations());
    }

    #[test]
    fn test_component_loose_fields() {
        let c = TreatmentComponent::from_value(json!({
            "component_type": "Fungicide",
            "dose_te": 5,
            "application_method_te": null,
            "notes_te": true,
            "extra": "ignored"
        }));
        assert_eq!(c.component_type.as_deref(), Some("Fungicide"));
        assert_eq!(c.dose_te.as_deref(), Some("5"));
        assert_eq!(c.application_method_te, None);
        assert_eq!(c.notes_te, None);
        assert_eq!(c.component_name_te, None);
    }

    #[test]
    fn test_component_from_non_object() {
        assert_eq!(TreatmentComponent::from_value(json!(42)), TreatmentComponent::default());
        assert_eq!(TreatmentComponent::from_value(json!("x")), TreatmentComponent::default());
    }

    #[test]
    fn test_component_serializes_wire_names() {
        let c = TreatmentComponent {
            component_type: Some("Fungicide".into()),
            dose_te: Some("5ml/L".into()),
            ..Default::default()
        };
        let text = serde_json::to_string(&c).unwrap();
        assert_eq!(text, r#"{"component_type":"Fungicide","dose_te":"5ml/L"}"#);
    }
}
