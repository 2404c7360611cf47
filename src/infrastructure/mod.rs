//! Infrastructure layer: terminal I/O implementations
//!
//! This layer implements the domain's I/O boundary traits.

pub mod prompt;

pub use prompt::{read_lossy_line, LinePrompt};
