//! Node values and their admissible range.

use std::fmt;

use crate::domain::token::TokenError;

/// Smallest value a node may hold.
pub const MIN_VALUE: i64 = -10_000;
/// Largest value a node may hold.
pub const MAX_VALUE: i64 = 10_000;

/// Integer payload of a tree node, always within `[MIN_VALUE, MAX_VALUE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeValue(i32);

impl NodeValue {
    pub fn new(value: i64) -> Result<Self, TokenError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self(value as i32))
        } else {
            Err(TokenError::OutOfRange(value))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Widened for summation.
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<i64> for NodeValue {
    type Error = TokenError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
