//! # Query Decoder
//!
//! Turns a raw query string into an [`AdvisoryRecord`].
//!
//! Decoding happens in two layers, mirroring what a browser page sees:
//!
//! 1. **Form decoding** ([`read_param`]): the query is split on `&`, `+`
//!    becomes a space and `%XX` escapes are decoded leniently (malformed
//!    escapes pass through, invalid UTF-8 is replaced).
//! 2. **Strict decoding** ([`strict_decode`]): the value is percent-decoded
//!    again, strictly. A malformed escape or invalid UTF-8 is a
//!    [`DecodeError`], and [`safe_decode`] falls back to the form-decoded
//!    value.
//!
//! Every failure has a defined fallback, so [`decode`] never fails.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use advisory_receipt::query;
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 30).unwrap();
//! let record = query::decode("?category=Fungal&stage=Flowering", now);
//!
//! assert_eq!(record.category, "Fungal");
//! assert_eq!(record.stage, "Flowering");
//! assert_eq!(record.title(), "Advisory");
//! ```

use chrono::{DateTime, Utc};
use percent_encoding::{percent_decode, percent_decode_str};
use serde_json::Value;
use thiserror::Error;

use crate::advisory::{
    AdvisoryRecord, DEFAULT_PROBLEM_NAME, PLACEHOLDER, RECEIPT_ID_PREFIX, TreatmentComponent,
};
use crate::clock::format_ist;

/// Recognised query parameters.
pub mod param {
    pub const PROBLEM_NAME_TE: &str = "problem_name_te";
    pub const PROBLEM_NAME_EN: &str = "problem_name_en";
    pub const CATEGORY: &str = "category";
    pub const STAGE: &str = "stage";
    pub const SYMPTOMS_TE: &str = "symptoms_te";
    pub const NOTES_TE: &str = "notes_te";
    pub const COMPONENTS: &str = "components";
    pub const RECEIPT_ID: &str = "receipt_id";
}

/// Why a value could not be decoded. Never leaves this module's callers:
/// every variant maps to a fallback.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The parameter is missing or empty.
    #[error("parameter is absent")]
    Absent,

    /// A `%` not followed by two hex digits.
    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),

    /// Escapes decode to bytes that are not UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    /// The components text is not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The components JSON is not an array.
    #[error("expected a JSON array")]
    NotAnArray,
}

/// Decode a query string into an advisory record.
///
/// `now` is the single clock reading used for both the default receipt id
/// and the displayed timestamp.
pub fn decode(query: &str, now: DateTime<Utc>) -> AdvisoryRecord {
    let text = |key: &str| safe_decode(read_param(query, key));

    AdvisoryRecord {
        problem_name_te: text(param::PROBLEM_NAME_TE),
        problem_name_en: text(param::PROBLEM_NAME_EN)
            .unwrap_or_else(|| DEFAULT_PROBLEM_NAME.to_string()),
        category: text(param::CATEGORY).unwrap_or_else(|| PLACEHOLDER.to_string()),
        stage: text(param::STAGE).unwrap_or_else(|| PLACEHOLDER.to_string()),
        symptoms_te: text(param::SYMPTOMS_TE),
        notes_te: text(param::NOTES_TE),
        components: parse_components(read_param(query, param::COMPONENTS).as_deref())
            .unwrap_or_default(),
        receipt_id: text(param::RECEIPT_ID).unwrap_or_else(|| default_receipt_id(now)),
        rendered_at: format_ist(now),
    }
}

/// `ADV-<epoch-ms>`.
pub fn default_receipt_id(now: DateTime<Utc>) -> String {
    format!("{}{}", RECEIPT_ID_PREFIX, now.timestamp_millis())
}

/// Read the first value for `key`, form-decoded.
///
/// A leading `?` is ignored. Returns `None` when the key does not appear.
pub fn read_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| form_decode(name) == key)
        .map(|(_, value)| form_decode(value))
}

/// `application/x-www-form-urlencoded` value decoding.
fn form_decode(s: &str) -> String {
    let bytes = s.replace('+', " ");
    percent_decode(bytes.as_bytes())
        .decode_utf8_lossy()
        .into_owned()
}

/// Strict percent-decoding: every `%` must start a valid escape and the
/// result must be UTF-8. `+` is left alone.
pub fn strict_decode(s: &str) -> Result<String, DecodeError> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(DecodeError::MalformedEscape(i));
            }
        }
    }

    percent_decode_str(s)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Strictly decode a raw value, falling back to the raw value on failure.
///
/// Absent and empty values are `None`.
pub fn safe_decode(raw: Option<String>) -> Option<String> {
    let raw = raw.filter(|v| !v.is_empty())?;
    let decoded = strict_decode(&raw).unwrap_or(raw);
    Some(decoded).filter(|v| !v.is_empty())
}

/// Parse the `components` parameter.
///
/// The caller collapses every error to an empty list.
pub fn parse_components(raw: Option<&str>) -> Result<Vec<TreatmentComponent>, DecodeError> {
    let raw = raw.filter(|v| !v.is_empty()).ok_or(DecodeError::Absent)?;
    let decoded = strict_decode(raw).unwrap_or_else(|_| raw.to_string());

    match serde_json::from_str::<Value>(&decoded)? {
        Value::Array(items) => Ok(items.into_iter().map(TreatmentComponent::from_value).collect()),
        _ => Err(DecodeError::NotAnArray),
    }
}
