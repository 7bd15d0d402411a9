//! Error types for the word primitives.
//!
//! The primitives themselves are total. Errors only come from the
//! boundaries: shift counts handed in as signed integers, and words
//! parsed from text.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for fallible word operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitopsError {
    /// Shift or rotate count outside [0, 32).
    OutOfRange {
        /// The rejected count.
        amount: i64,
    },

    /// Text that is neither a decimal nor a `0x` hex integer.
    InvalidWord(String),
}

impl Display for BitopsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BitopsError::OutOfRange { amount } => {
                write!(f, "Shift count {} out of range: must be in [0, 32)", amount)
            }
            BitopsError::InvalidWord(text) => {
                write!(f, "Invalid word {:?}: expected decimal or 0x-prefixed hex", text)
            }
        }
    }
}

impl Error for BitopsError {}
