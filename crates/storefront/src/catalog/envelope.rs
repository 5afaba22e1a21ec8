//! Envelope decoding for upstream catalog responses.
//!
//! The catalog API wraps its record lists inconsistently: sometimes a bare
//! JSON list, sometimes nested under `data`, `categories`, `plants`, or
//! `data.data`. Each recognized wrapper is modeled as an [`Envelope`] variant
//! and probed in a fixed priority order; anything else decodes to
//! [`Envelope::Empty`]. Decoding is best-effort and never fails.

use serde_json::Value;

/// A recognized wrapper shape around the actual record list.
///
/// Variants are ordered by probe priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// The payload itself is a list.
    Bare(Vec<Value>),
    /// List under `data`.
    Data(Vec<Value>),
    /// List under `categories`.
    Categories(Vec<Value>),
    /// List under `plants`.
    Plants(Vec<Value>),
    /// List under `data.data`.
    NestedData(Vec<Value>),
    /// No recognized wrapper; carries no records.
    Empty,
}

impl Envelope {
    /// Decode a payload of unknown shape into the first matching variant.
    #[must_use]
    pub fn sniff(payload: &Value) -> Self {
        if let Some(list) = payload.as_array() {
            return Self::Bare(list.clone());
        }

        let Some(obj) = payload.as_object() else {
            // null, strings, numbers: nothing to extract
            return Self::Empty;
        };

        if let Some(list) = obj.get("data").and_then(Value::as_array) {
            return Self::Data(list.clone());
        }
        if let Some(list) = obj.get("categories").and_then(Value::as_array) {
            return Self::Categories(list.clone());
        }
        if let Some(list) = obj.get("plants").and_then(Value::as_array) {
            return Self::Plants(list.clone());
        }
        if let Some(list) = obj
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.get("data"))
            .and_then(Value::as_array)
        {
            return Self::NestedData(list.clone());
        }

        Self::Empty
    }

    /// The records carried by this envelope; empty for [`Envelope::Empty`].
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::Bare(records)
            | Self::Data(records)
            | Self::Categories(records)
            | Self::Plants(records)
            | Self::NestedData(records) => records,
            Self::Empty => Vec::new(),
        }
    }
}

/// Extract the record list from an arbitrarily-shaped payload.
///
/// Absence of a recognized shape is a normal outcome (empty list), not an
/// error.
#[must_use]
pub fn extract_records(payload: &Value) -> Vec<Value> {
    Envelope::sniff(payload).into_records()
}

/// Return the first candidate key present in `record` with a non-null value.
///
/// This is the single mechanism for tolerating inconsistent upstream field
/// naming (`plant_name` vs `name` vs `common_name`). Non-object records have
/// no fields.
#[must_use]
pub fn pick_field<'a>(record: &'a Value, candidate_keys: &[&str]) -> Option<&'a Value> {
    let obj = record.as_object()?;
    candidate_keys
        .iter()
        .find_map(|key| obj.get(*key).filter(|value| !value.is_null()))
}
