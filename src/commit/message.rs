//! Commit message value and response post-processing.

use std::fmt;

/// Message used whenever generation fails or yields nothing usable.
pub const FALLBACK_MESSAGE: &str = "Update files";

/// Where a commit message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOrigin {
    Generated,
    Fallback,
}

/// A commit message ready to hand to `git commit -m`.
///
/// The text is never empty and never contains a double quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
    origin: MessageOrigin,
}

impl CommitMessage {
    /// Clean up a model response. Returns `None` if nothing is left.
    pub fn from_response(raw: &str) -> Option<Self> {
        let text = clean_response(raw);
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text,
            origin: MessageOrigin::Generated,
        })
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_MESSAGE.to_string(),
            origin: MessageOrigin::Fallback,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> MessageOrigin {
        self.origin
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.text.lines().next().unwrap_or(&self.text)
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == MessageOrigin::Fallback
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Trim, unwrap a markdown code fence, and strip every double quote.
pub fn clean_response(raw: &str) -> String {
    let trimmed = strip_code_fence(raw.trim());
    trimmed.replace('"', "").trim().to_string()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop an info string such as ```text on the opening line
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim().contains(' ') => body.trim(),
        _ => inner.trim(),
    }
}
