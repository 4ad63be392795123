//! Terminal results of a push run.

use crate::commit::CommitMessage;

/// How the final push went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub succeeded: bool,
    pub used_upstream_retry: bool,
    /// Branch used for the upstream retry; absent when no retry was needed.
    pub branch: Option<String>,
}

impl PushOutcome {
    pub fn direct() -> Self {
        Self {
            succeeded: true,
            used_upstream_retry: false,
            branch: None,
        }
    }

    pub fn via_upstream(branch: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            used_upstream_retry: true,
            branch: Some(branch.into()),
        }
    }
}

/// A run that finished without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing to commit.
    UpToDate,
    Pushed {
        message: CommitMessage,
        files_changed: usize,
        outcome: PushOutcome,
    },
}
