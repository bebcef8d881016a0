use thiserror::Error;

/// Illegal access on an empty or too-short container.
///
/// This is the misuse signal: `front`, `back`, `top`, and `at` return it when
/// no element exists at the requested position. Expected absence (a `find`
/// miss, a rejected duplicate insert) is reported with `Option`/`bool`
/// results instead, never with this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("out of range: {0}")]
pub struct OutOfRange(pub &'static str);
