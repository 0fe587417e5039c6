//! gemform-domain
//!
//! Pure domain models for the product search form: option enumerations,
//! field identifiers, range and contact values.
//! No I/O, no CLI, no transport. Only data types and core enums.

pub mod catalog;
pub mod common;
pub mod field;

pub use catalog::*;
pub use common::*;
pub use field::*;
