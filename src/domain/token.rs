//! Input tokens accepted while building a tree.
//!
//! A token is either a node value, the null sentinel ("no child here") or the
//! quit sentinel ("stop asking, keep what we have"). Sentinels are matched
//! case-insensitively after trimming.

use thiserror::Error;

use crate::domain::value::NodeValue;

pub const DEFAULT_NULL_TOKEN: &str = "null";
pub const DEFAULT_QUIT_TOKEN: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Value(NodeValue),
    Null,
    Quit,
}

/// Why a raw token was refused. The builder re-asks the same question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("not a number: '{0}'")]
    NotANumber(String),

    #[error("value must be between -10000 and 10000, got {0}")]
    OutOfRange(i64),
}

/// The sentinel words recognised by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrammar {
    null_token: String,
    quit_token: String,
}

impl Default for TokenGrammar {
    fn default() -> Self {
        Self::new(DEFAULT_NULL_TOKEN, DEFAULT_QUIT_TOKEN)
    }
}

impl TokenGrammar {
    pub fn new(null_token: impl Into<String>, quit_token: impl Into<String>) -> Self {
        Self {
            null_token: null_token.into().trim().to_lowercase(),
            quit_token: quit_token.into().trim().to_lowercase(),
        }
    }

    pub fn null_token(&self) -> &str {
        &self.null_token
    }

    pub fn quit_token(&self) -> &str {
        &self.quit_token
    }

    /// Classify one raw line of input.
    ///
    /// The quit sentinel is checked first, then null, then the integer range.
    pub fn parse(&self, raw: &str) -> Result<Token, TokenError> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();
        if lowered == self.quit_token {
            return Ok(Token::Quit);
        }
        if lowered == self.null_token {
            return Ok(Token::Null);
        }
        let number: i64 = trimmed
            .parse()
            .map_err(|_| TokenError::NotANumber(trimmed.to_string()))?;
        NodeValue::new(number).map(Token::Value)
    }
}
