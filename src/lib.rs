#![doc(test(attr(deny(warnings))))]

//! gemform collects product-search criteria through a dependent form and
//! submits a normalized filter payload to a search agent.
//!
//! The domain, pipeline, configuration and HTTP delivery live in the
//! `gemform-*` crates; this crate adds tracing setup and the CLI.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("gemform tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
