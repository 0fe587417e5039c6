//! gemform-core
//!
//! Dependent-field resolution, payload normalization, validation and the
//! submit pipeline for the product search form.
//! Depends on gemform-domain. No terminal I/O and no network code; the
//! transport is reached only through [`SubmitTransport`].

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod payload;
pub mod resolver;
pub mod session;
pub mod source;
pub mod submit;
pub mod validator;

pub use catalog::OptionCatalog;
pub use error::{CoreError, TransportError};
pub use normalize::{clean, normalize_range};
pub use payload::{assemble, assemble_from, FilterPayload, SubmissionPayload};
pub use resolver::{resolve_category, resolve_metal, CategoryResolution, Visibility};
pub use session::FormSession;
pub use source::FieldValueSource;
pub use submit::{SubmitOutcome, SubmitReceipt, SubmitService, SubmitTransport};
pub use validator::FormValidator;

#[cfg(test)]
mod tests;
