//! Value types shared by the form session and the payload.

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Contact block sent at the top level of every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub name: String,
}

impl ContactInfo {
    pub fn new(
        email: impl Into<String>,
        phone: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
            name: name.into(),
        }
    }

    /// Raw value of a contact field. Non-contact identifiers yield `None`.
    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Email => Some(&self.email),
            FieldId::Phone => Some(&self.phone),
            FieldId::Name => Some(&self.name),
            _ => None,
        }
    }
}

/// A resolved two-sided filter. Bounds are opaque numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub from: String,
    pub to: String,
}

impl Range {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Both bounds equal, as produced when only one side was supplied.
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}
