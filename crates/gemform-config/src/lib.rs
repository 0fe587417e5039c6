//! gemform-config
//!
//! Submission settings: search-agent endpoint, transport options and the
//! enforced-required field set.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
