//! The fixed set of git invocations the push pipeline issues.

use std::fmt;

/// Remote used when the initial push has to establish an upstream.
pub const DEFAULT_REMOTE: &str = "origin";

/// A git command, passed to the binary as an argv vector (never via a shell).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git rev-parse --is-inside-work-tree`
    IsInsideWorkTree,
    /// `git status --porcelain`
    StatusPorcelain,
    /// `git diff --cached --stat`
    DiffStatCached,
    /// `git add -A`
    AddAll,
    /// `git commit -m <message>`
    Commit { message: String },
    /// `git push`
    Push,
    /// `git push -u <remote> <branch>`
    PushSetUpstream { remote: String, branch: String },
    /// `git branch --show-current`
    CurrentBranch,
}

impl GitCommand {
    /// Push `branch` to the default remote and record it as upstream.
    pub fn push_set_upstream(branch: impl Into<String>) -> Self {
        GitCommand::PushSetUpstream {
            remote: DEFAULT_REMOTE.to_string(),
            branch: branch.into(),
        }
    }

    /// Arguments after the `git` program name.
    pub fn args(&self) -> Vec<&str> {
        match self {
            GitCommand::IsInsideWorkTree => vec!["rev-parse", "--is-inside-work-tree"],
            GitCommand::StatusPorcelain => vec!["status", "--porcelain"],
            GitCommand::DiffStatCached => vec!["diff", "--cached", "--stat"],
            GitCommand::AddAll => vec!["add", "-A"],
            GitCommand::Commit { message } => vec!["commit", "-m", message.as_str()],
            GitCommand::Push => vec!["push"],
            GitCommand::PushSetUpstream { remote, branch } => {
                vec!["push", "-u", remote.as_str(), branch.as_str()]
            }
            GitCommand::CurrentBranch => vec!["branch", "--show-current"],
        }
    }

    /// Whether this command publishes commits to a remote.
    pub fn is_push(&self) -> bool {
        matches!(self, GitCommand::Push | GitCommand::PushSetUpstream { .. })
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in self.args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
