use gemform_domain::{ContactInfo, FieldId};

use crate::source::FieldValueSource;

/// Gate in front of submission.
///
/// The enforced-required set is configured independently of
/// [`FieldId::marked_required`]; by default `category` is marked but not
/// enforced.
#[derive(Debug, Clone)]
pub struct FormValidator {
    enforced: Vec<FieldId>,
    form_valid: bool,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(FieldId::CONTACT.to_vec())
    }
}

impl FormValidator {
    pub fn new(enforced: Vec<FieldId>) -> Self {
        Self {
            enforced,
            form_valid: true,
        }
    }

    pub fn enforced(&self) -> &[FieldId] {
        &self.enforced
    }

    /// Last validation result. Starts out `true` so submission is enabled
    /// before the first attempt.
    pub fn is_form_valid(&self) -> bool {
        self.form_valid
    }

    /// Checks every enforced field is non-blank after trimming and records the
    /// outcome in the validity flag.
    pub fn validate(&mut self, source: &impl FieldValueSource) -> bool {
        self.form_valid = self
            .enforced
            .iter()
            .all(|field| !source.get_value(*field).trim().is_empty());
        self.form_valid
    }

    pub fn validate_contact(&mut self, contact: &ContactInfo) -> bool {
        self.validate(contact)
    }

    /// Enforced fields that are currently blank. Diagnostic only; does not
    /// touch the validity flag.
    pub fn missing_fields(&self, source: &impl FieldValueSource) -> Vec<FieldId> {
        self.enforced
            .iter()
            .copied()
            .filter(|field| source.get_value(*field).trim().is_empty())
            .collect()
    }
}
