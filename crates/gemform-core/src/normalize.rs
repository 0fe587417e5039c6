//! Range normalization and recursive removal of empty values.
//!
//! A range is any object carrying both a `from` and a `to` key. Before the
//! leaves of an object are judged, every range child has a missing bound
//! filled from the other one, so a single supplied bound survives cleaning as
//! a degenerate `{from: x, to: x}` range.

use serde_json::{Map, Value};
use tracing::trace;

use gemform_domain::Range;

const FROM: &str = "from";
const TO: &str = "to";

/// Canonicalizes one raw two-sided input.
///
/// Bounds are opaque: no numeric parsing and no `from <= to` check.
pub fn normalize_range(from: &str, to: &str) -> Option<Range> {
    match (from.is_empty(), to.is_empty()) {
        (false, false) => Some(Range::new(from, to)),
        (false, true) => Some(Range::new(from, from)),
        (true, false) => Some(Range::new(to, to)),
        (true, true) => None,
    }
}

/// Returns a copy of `record` without empty strings, numeric zeros, nulls,
/// or containers that end up empty, at any depth.
pub fn clean(record: &Map<String, Value>) -> Map<String, Value> {
    let mut working = record.clone();
    fill_range_children(&mut working);

    let mut cleaned = Map::new();
    for (key, value) in working {
        if let Some(kept) = clean_value(value) {
            cleaned.insert(key, kept);
        } else {
            trace!(key = %key, "dropping empty filter value");
        }
    }
    cleaned
}

fn clean_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Object(map) => {
            let cleaned = clean(&map);
            (!cleaned.is_empty()).then_some(Value::Object(cleaned))
        }
        Value::Array(items) => {
            let cleaned: Vec<Value> = items
                .into_iter()
                .map(|mut item| {
                    if let Value::Object(child) = &mut item {
                        fill_range(child);
                    }
                    item
                })
                .filter_map(clean_value)
                .collect();
            (!cleaned.is_empty()).then_some(Value::Array(cleaned))
        }
        other => Some(other),
    }
}

/// Fills the empty bound of every range-shaped child of `record`.
fn fill_range_children(record: &mut Map<String, Value>) {
    for value in record.values_mut() {
        if let Value::Object(child) = value {
            fill_range(child);
        }
    }
}

fn fill_range(candidate: &mut Map<String, Value>) {
    if !(candidate.contains_key(FROM) && candidate.contains_key(TO)) {
        return;
    }
    let from_blank = candidate.get(FROM).map(is_blank_bound).unwrap_or(true);
    let to_blank = candidate.get(TO).map(is_blank_bound).unwrap_or(true);
    match (from_blank, to_blank) {
        (false, true) => {
            let from = candidate[FROM].clone();
            candidate.insert(TO.to_string(), from);
        }
        (true, false) => {
            let to = candidate[TO].clone();
            candidate.insert(FROM.to_string(), to);
        }
        _ => {}
    }
}

fn is_blank_bound(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
