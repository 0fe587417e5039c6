//! Loading raw form values from a JSON file.
//!
//! The file is a flat object keyed by field id (`"ringSizeFrom": "6"`).
//! Ranges may also be written nested under their payload key
//! (`"ringSize": {"from": "6", "to": "7"}`). Numbers and booleans are
//! converted to their text form; `null` reads as unset.

use std::{collections::BTreeMap, fs, path::Path};

use serde_json::Value;

use gemform_domain::{FieldId, RangeKind};

use crate::errors::CliError;

/// Raw values keyed by field id, ready to be used as a field-value source.
pub type RawValues = BTreeMap<String, String>;

pub fn load_values_from_file(path: &Path) -> Result<RawValues, CliError> {
    let data = fs::read_to_string(path)?;
    parse_values(&data)
}

pub fn parse_values(data: &str) -> Result<RawValues, CliError> {
    let Value::Object(object) = serde_json::from_str::<Value>(data)? else {
        return Err(CliError::ValueFile("top level must be a JSON object".into()));
    };

    let mut values = RawValues::new();
    for (key, value) in object {
        if let Some(field) = FieldId::from_id(&key) {
            values.insert(field.as_str().to_string(), scalar_text(&key, &value)?);
            continue;
        }
        let Some(range) = RangeKind::ALL.iter().find(|range| range.key() == key) else {
            return Err(CliError::ValueFile(format!("unknown field `{}`", key)));
        };
        let Value::Object(bounds) = &value else {
            return Err(CliError::ValueFile(format!(
                "`{}` must be an object with `from` and `to`",
                key
            )));
        };
        for (side, field) in [("from", range.from_field()), ("to", range.to_field())] {
            let text = match bounds.get(side) {
                Some(bound) => scalar_text(&key, bound)?,
                None => String::new(),
            };
            values.insert(field.as_str().to_string(), text);
        }
    }
    Ok(values)
}

fn scalar_text(key: &str, value: &Value) -> Result<String, CliError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(_) | Value::Object(_) => Err(CliError::ValueFile(format!(
            "`{}` must be a string or number",
            key
        ))),
    }
}
