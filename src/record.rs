//! Records and record sets.
//!
//! A [`Record`] is a flat mapping from field name to [`FieldValue`]. The
//! field set is not fixed across records. A [`RecordSet`] is the ordered
//! sequence delivered by a record source; it is replaced wholesale on
//! refetch and never edited in place.
//!
//! # Examples
//!
//! ```
//! use approvals_board::RecordSet;
//! use serde_json::json;
//!
//! let records = RecordSet::from_json_value(&json!([
//!     {"title": "Badge access", "Status": "Pending"},
//!     {"title": "Laptop", "Status": "Approved"},
//! ]));
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records.get(1).unwrap().text("Status"), Some("Approved"));
//! assert_eq!(records.distinct_values("Status"), vec!["Pending", "Approved"]);
//! ```

use crate::value::FieldValue;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::sync::Arc;

/// One immutable row of data. Cloning is cheap; the fields are shared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Arc<HashMap<String, FieldValue>>,
}

impl Record {
    pub fn new(fields: HashMap<String, FieldValue>) -> Self {
        Record {
            fields: Arc::new(fields),
        }
    }

    /// Build a record from `(field, value)` pairs. Later pairs win on
    /// duplicate field names.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Record::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Convert a JSON object. Nested values are not scalars and are dropped.
    pub fn from_json_object(object: &Map<String, JsonValue>) -> Self {
        let mut fields = HashMap::with_capacity(object.len());
        for (key, value) in object {
            match FieldValue::from_json(value) {
                Some(v) => {
                    fields.insert(key.clone(), v);
                }
                None => log::debug!("dropping non-scalar field '{}'", key),
            }
        }
        Record::new(fields)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// String value of a field, if present and a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&*self.fields, serializer)
    }
}

/// Ordered, immutable sequence of records.
///
/// Cloning shares the underlying storage, so views and pages can hold a
/// `RecordSet` without copying rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    records: Arc<[Record]>,
}

impl Default for RecordSet {
    fn default() -> Self {
        RecordSet::empty()
    }
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        RecordSet {
            records: Arc::from(records),
        }
    }

    pub fn empty() -> Self {
        RecordSet::new(Vec::new())
    }

    /// Build a record set from a decoded API payload.
    ///
    /// Fails closed: a payload that is not an array yields an empty set, and
    /// array elements that are not objects are skipped.
    pub fn from_json_value(payload: &JsonValue) -> Self {
        let Some(items) = payload.as_array() else {
            log::warn!("records payload is not an array; treating it as empty");
            return RecordSet::empty();
        };

        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item.as_object() {
                Some(object) => records.push(Record::from_json_object(object)),
                None => log::warn!("skipping record {}: not a JSON object", i),
            }
        }
        RecordSet::new(records)
    }

    /// Parse a JSON document. Only invalid JSON is an error; a well-formed
    /// non-array document yields an empty set.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let payload: JsonValue = serde_json::from_str(text)?;
        Ok(RecordSet::from_json_value(&payload))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn get_row(&self, index: usize) -> Result<&Record, String> {
        self.records
            .get(index)
            .ok_or_else(|| format!("Row {} out of range [0, {})", index, self.len()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// New set holding the records at `indices`, in the given order.
    /// Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> RecordSet {
        RecordSet::new(
            indices
                .iter()
                .filter_map(|&i| self.records.get(i).cloned())
                .collect(),
        )
    }

    /// Contiguous sub-range, clamped to the set's length.
    pub fn slice(&self, range: Range<usize>) -> RecordSet {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        RecordSet::new(self.records[start..end].to_vec())
    }

    /// Distinct values observed for `field`, in first-seen order. Records
    /// where the field is absent or null contribute nothing.
    pub fn distinct_values(&self, field: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in self.records.iter() {
            match record.get(field) {
                Some(value) if !value.is_null() => {
                    let text = value.display_string();
                    if seen.insert(text.clone()) {
                        values.push(text);
                    }
                }
                _ => {}
            }
        }
        values
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.records.iter().map(Record::to_json).collect())
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        RecordSet::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.iter())
    }
}
