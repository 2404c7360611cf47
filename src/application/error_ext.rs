//! Error conversion helpers for terminal I/O
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Name the operation that failed.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", menu).io_context("write menu")?;
    /// ```
    fn io_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn io_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: context.to_string(),
            source,
        })
    }
}
