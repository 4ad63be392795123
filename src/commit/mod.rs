//! AI-generated commit messages.

pub mod generator;
pub mod message;
pub mod prompt;

pub use generator::CommitMessageGenerator;
pub use message::{CommitMessage, FALLBACK_MESSAGE, MessageOrigin};
pub use prompt::build_commit_prompt;
