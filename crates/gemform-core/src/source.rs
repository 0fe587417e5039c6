use std::collections::{BTreeMap, HashMap};

use gemform_domain::{ContactInfo, FieldId};

/// Reports committed raw values by field identifier.
///
/// Unset fields read as the empty string.
pub trait FieldValueSource {
    fn get_value(&self, field: FieldId) -> String;

    fn contact(&self) -> ContactInfo {
        ContactInfo::new(
            self.get_value(FieldId::Email),
            self.get_value(FieldId::Phone),
            self.get_value(FieldId::Name),
        )
    }
}

impl FieldValueSource for BTreeMap<String, String> {
    fn get_value(&self, field: FieldId) -> String {
        self.get(field.as_str()).cloned().unwrap_or_default()
    }
}

impl FieldValueSource for HashMap<String, String> {
    fn get_value(&self, field: FieldId) -> String {
        self.get(field.as_str()).cloned().unwrap_or_default()
    }
}

impl FieldValueSource for BTreeMap<FieldId, String> {
    fn get_value(&self, field: FieldId) -> String {
        self.get(&field).cloned().unwrap_or_default()
    }
}

impl FieldValueSource for ContactInfo {
    fn get_value(&self, field: FieldId) -> String {
        self.get(field).map(str::to_string).unwrap_or_default()
    }

    fn contact(&self) -> ContactInfo {
        self.clone()
    }
}

impl<S: FieldValueSource + ?Sized> FieldValueSource for &S {
    fn get_value(&self, field: FieldId) -> String {
        (**self).get_value(field)
    }
}
