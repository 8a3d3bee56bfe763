//! Error types shared by the wheel and calendar modules.

use std::num::ParseIntError;

/// Raised when raw input handed to the core cannot be accepted.
///
/// None of these indicate a defect in the computation itself; internal
/// invariant violations panic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The day offset was below zero.
    #[error("invalid input: negative day offset {offset}")]
    NegativeOffset { offset: i64 },

    /// The day offset text was not an integer.
    #[error("invalid input: {text:?} is not an integer day offset")]
    InvalidOffset {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A numeric code contained something other than `0`..=`9`.
    #[error("invalid input: {found:?} at position {position} is not a digit")]
    InvalidDigit { found: char, position: usize },

    #[error("invalid input: empty numeric code")]
    EmptyCode,

    /// Only produced under [`LengthPolicy::Strict`](crate::LengthPolicy).
    #[error("invalid input: code lengths differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    /// The input source ran out before the expected line.
    #[error("invalid input: missing line {line}")]
    MissingLine { line: usize },
}
