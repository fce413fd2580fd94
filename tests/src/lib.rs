//! Shared fixtures for the vouch integration tests.

use std::sync::Once;

use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Install a subscriber writing through the test harness, filtered by
/// `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A person with only public fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_owned(),
            age,
        }
    }
}

/// Error raised by [`divide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("a cannot be 0")]
    ZeroNumerator,
    #[error("b cannot be 10")]
    DivisorOfTen,
}

/// A helper with a couple of failure modes to exercise error checks.
pub fn divide(a: i32, b: i32) -> Result<i32, MathError> {
    if a == 0 {
        return Err(MathError::ZeroNumerator);
    }

    if b == 10 {
        return Err(MathError::DivisorOfTen);
    }

    Ok(((a + b) / (b - 10)) / a)
}
