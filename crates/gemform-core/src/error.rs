use thiserror::Error;

use gemform_domain::FieldId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("`{value}` is not offered for {field} with the current selection")]
    OptionUnavailable { field: FieldId, value: String },
    #[error("Unknown {field} `{value}`{}", suggestion_suffix(.suggestion))]
    UnknownOption {
        field: FieldId,
        value: String,
        suggestion: Option<&'static str>,
    },
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(label) => format!(" (did you mean `{label}`?)"),
        None => String::new(),
    }
}

/// Failure reported by a [`crate::SubmitTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Search agent responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("HTTP client error: {0}")]
    Client(String),
}
