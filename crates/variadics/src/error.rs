//! Error type shared by the type-asserting helpers.
//!
//! Only assertions on opaque values can fail. Shape errors (not a sequence,
//! not a map) are ruled out by trait bounds, and reference-shaped helpers
//! report a non-reference through `Option`/`bool` instead of an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An opaque value was asserted to hold a type it does not hold.
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
