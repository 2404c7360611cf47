//! Line-oriented interactive token source.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::domain::builder::{BuildEvent, Request, TokenSource};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::token::TokenError;

/// Prompts on `output` and reads one token per line from `input`.
///
/// Feedback writes cannot fail the build directly; the first write error is
/// held back and reported by the next `next_token` call.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    null_token: String,
    quit_token: String,
    pending_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W, null_token: impl Into<String>, quit_token: impl Into<String>) -> Self {
        Self {
            input,
            output,
            null_token: null_token.into(),
            quit_token: quit_token.into(),
            pending_error: None,
        }
    }

    fn prompt_text(&self, request: &Request) -> String {
        match request {
            Request::Root => "Enter root value: ".to_string(),
            Request::Child { .. } => format!("Enter {request} (or '{}' to finish): ", self.quit_token),
        }
    }

    fn say(&mut self, line: &str) {
        if self.pending_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.output, "{line}") {
            warn!("prompt output failed: {e}");
            self.pending_error = Some(e);
        }
    }
}

/// Next line without its terminator, `None` at end of input.
///
/// Bytes that are not UTF-8 become U+FFFD, so a garbled line is answered like
/// any other unusable input instead of failing the read.
pub fn read_lossy_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn source_err(context: &str, e: io::Error) -> DomainError {
    DomainError::TokenSource {
        message: format!("{context}: {e}"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<R: BufRead, W: Write> TokenSource for LinePrompt<R, W> {
    fn next_token(&mut self, request: &Request) -> DomainResult<Option<String>> {
        if let Some(e) = self.pending_error.take() {
            return Err(source_err("write prompt", e));
        }

        let text = self.prompt_text(request);
        write!(self.output, "{text}").map_err(|e| source_err("write prompt", e))?;
        self.output.flush().map_err(|e| source_err("flush prompt", e))?;

        read_lossy_line(&mut self.input).map_err(|e| source_err("read token", e))
    }

    fn feedback(&mut self, event: &BuildEvent) {
        let line = match event {
            BuildEvent::RootAdded(value) => format!("Root {value} added"),
            BuildEvent::RootMissing => "Root cannot be null!".to_string(),
            BuildEvent::Expanding { parent } => format!("\nAdding children for node {parent}"),
            BuildEvent::Attached {
                parent,
                side,
                value,
            } => format!("Added {value} as {side} child of {parent}"),
            BuildEvent::NullChild { parent, side } => {
                format!("{} child of {parent} is null", capitalize(&side.to_string()))
            }
            BuildEvent::Rejected {
                error: TokenError::NotANumber(_),
                ..
            } => format!(
                "Enter a valid number, '{}', or '{}' to quit",
                self.null_token, self.quit_token
            ),
            BuildEvent::Rejected {
                error: TokenError::OutOfRange(_),
                ..
            } => "Value must be between -10000 and 10000".to_string(),
            BuildEvent::Stopped => return,
            BuildEvent::Finished { .. } => "Tree creation completed!".to_string(),
        };
        self.say(&line);
    }
}
