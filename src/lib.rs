//! aipush - stage, commit with an AI-written message, and push in one step.
//!
//! # Overview
//!
//! aipush checks that it is inside a git repository with pending changes,
//! stages everything, asks Gemini for a conventional commit message, commits,
//! and pushes. When the branch has no upstream yet, it retries once with
//! `git push -u origin <branch>`.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod push;

// Re-export commonly used types
pub use commit::{CommitMessage, CommitMessageGenerator, MessageOrigin};
pub use config::Config;
pub use error::{CommandError, ConfigError, GenerationError, PushError};
pub use git::{CommandExecutor, CommandResult, GitCommand, SystemExecutor};
pub use llm::{GeminiClient, TextGenerator};
pub use push::{Completion, PushOrchestrator, PushOutcome};
