//! Assembly of the submission payload sent to the search agent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use gemform_domain::{ContactInfo, FieldId, Range, RangeKind};

use crate::{
    normalize::{clean, normalize_range},
    source::FieldValueSource,
};

/// Entries of the filter record, in form order. Serialized keys are sorted.
enum FilterEntry {
    Scalar(FieldId),
    Range(RangeKind),
}

const FILTER_LAYOUT: &[FilterEntry] = &[
    FilterEntry::Scalar(FieldId::Category),
    FilterEntry::Scalar(FieldId::Type),
    FilterEntry::Range(RangeKind::Length),
    FilterEntry::Range(RangeKind::Width),
    FilterEntry::Range(RangeKind::Weight),
    FilterEntry::Scalar(FieldId::Metal),
    FilterEntry::Scalar(FieldId::Carat),
    FilterEntry::Scalar(FieldId::Brand),
    FilterEntry::Range(RangeKind::Price),
    FilterEntry::Range(RangeKind::RingSize),
    FilterEntry::Scalar(FieldId::StoneType),
    FilterEntry::Scalar(FieldId::StoneColor),
];

/// Cleaned filter record. Keys without a meaningful value are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterPayload(Map<String, Value>);

impl FilterPayload {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn scalar(&self, field: FieldId) -> Option<&str> {
        self.0.get(field.as_str()).and_then(Value::as_str)
    }

    pub fn range(&self, kind: RangeKind) -> Option<Range> {
        self.0
            .get(kind.key())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Contact fields at the top level plus the nested filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "FilterPayload::is_empty")]
    pub filter: FilterPayload,
}

/// Collects the raw filter record from `source`, one-sided ranges already
/// filled and fully blank ranges already dropped.
///
/// Every filter field is read, including those in hidden groups.
pub fn collect_raw_filter(source: &impl FieldValueSource) -> Map<String, Value> {
    let mut record = Map::new();
    for entry in FILTER_LAYOUT {
        match entry {
            FilterEntry::Scalar(field) => {
                record.insert(
                    field.as_str().to_string(),
                    Value::String(source.get_value(*field)),
                );
            }
            FilterEntry::Range(kind) => {
                let from = source.get_value(kind.from_field());
                let to = source.get_value(kind.to_field());
                if let Some(range) = normalize_range(&from, &to) {
                    let mut bounds = Map::new();
                    bounds.insert("from".into(), Value::String(range.from));
                    bounds.insert("to".into(), Value::String(range.to));
                    record.insert(kind.key().to_string(), Value::Object(bounds));
                }
            }
        }
    }
    record
}

pub fn assemble(contact: &ContactInfo, source: &impl FieldValueSource) -> SubmissionPayload {
    let raw = collect_raw_filter(source);
    SubmissionPayload {
        contact: contact.clone(),
        filter: FilterPayload(clean(&raw)),
    }
}

/// Assembles using the contact fields reported by `source` itself.
pub fn assemble_from(source: &impl FieldValueSource) -> SubmissionPayload {
    assemble(&source.contact(), source)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn raw_filter_skips_blank_ranges_but_keeps_blank_scalars() {
        let raw = collect_raw_filter(&values(&[("priceTo", "300")]));
        assert_eq!(raw.get("price"), Some(&json!({"from": "300", "to": "300"})));
        assert!(!raw.contains_key("length"));
        assert_eq!(raw.get("brand"), Some(&json!("")));
    }

    #[test]
    fn empty_filter_is_omitted_from_wire_format() {
        let contact = ContactInfo::new("a@b.com", "123", "X");
        let payload = assemble(&contact, &BTreeMap::<String, String>::new());
        assert!(payload.filter.is_empty());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"email": "a@b.com", "phone": "123", "name": "X"})
        );
    }

    #[test]
    fn typed_accessors_read_cleaned_filter() {
        let source = values(&[("metal", "Silver"), ("widthFrom", "2"), ("widthTo", "5")]);
        let payload = assemble_from(&source);
        assert_eq!(payload.filter.scalar(FieldId::Metal), Some("Silver"));
        assert_eq!(payload.filter.range(RangeKind::Width), Some(Range::new("2", "5")));
        assert_eq!(payload.filter.range(RangeKind::Weight), None);
        assert_eq!(payload.filter.len(), 2);
    }
}
