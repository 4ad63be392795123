//! Error types for aipush modules using thiserror.

use thiserror::Error;

/// Errors from reading configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to your environment or to a .env file in this directory.")]
    MissingApiKey(&'static str),
}

/// Why a single git invocation failed.
///
/// Carried inside a [`CommandResult`](crate::git::CommandResult) rather than
/// returned as `Err`, so callers can branch on it like any other outcome.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {output}",
             .code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

/// Errors from the text-generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to the generation service failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Generation service timed out after {0} seconds")]
    Timeout(u64),

    #[error("Generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generation service returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("Generation service blocked the prompt: {0}")]
    Blocked(String),

    #[error("Generation service returned no text")]
    EmptyResponse,
}

/// Terminal failures of the push pipeline.
#[derive(Error, Debug)]
pub enum PushError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Failed to read repository status: {0}")]
    StatusFailed(String),

    #[error("Failed to stage changes: {0}")]
    StagingFailed(String),

    #[error("Failed to commit changes: {0}")]
    CommitFailed(String),

    #[error("Push failed and the current branch could not be determined: {0}")]
    NoBranch(String),

    #[error("Push to origin/{branch} failed: {output}")]
    PushFailed { branch: String, output: String },
}
