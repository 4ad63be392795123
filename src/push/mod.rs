//! Push pipeline: stage, commit with a generated message, and push.
//!
//! Runs as an explicit state machine. Each state issues at most a couple of
//! git commands, waits for them, and decides the next state:
//!
//! ```text
//! CheckRepo -> CheckChanges -> Stage -> GenerateMessage -> Commit -> Push
//!                   |                        |                        |
//!                   v                        v                        v
//!              Done(UpToDate)         Done(UpToDate)             PushRetry
//! ```
//!
//! Any failing command moves straight to `Abort`. The only recovery is a
//! single `git push -u origin <branch>` after the plain push fails.

pub mod outcome;
pub mod report;

use tracing::{debug, info, warn};

use crate::commit::{CommitMessage, CommitMessageGenerator};
use crate::error::PushError;
use crate::git::{CommandExecutor, GitCommand, RepositoryStatus};
use crate::llm::TextGenerator;

pub use outcome::{Completion, PushOutcome};

/// A step of the pipeline, carrying what later steps need.
#[derive(Debug)]
enum State {
    CheckRepo,
    CheckChanges,
    Stage {
        status: RepositoryStatus,
    },
    GenerateMessage {
        status: RepositoryStatus,
    },
    Commit {
        message: CommitMessage,
        files_changed: usize,
    },
    Push {
        message: CommitMessage,
        files_changed: usize,
    },
    PushRetry {
        message: CommitMessage,
        files_changed: usize,
        push_output: String,
    },
    Done(Completion),
    Abort(PushError),
}

/// Drives a single stage-commit-push run.
pub struct PushOrchestrator<E, G> {
    executor: E,
    generator: CommitMessageGenerator<G>,
}

impl<E: CommandExecutor, G: TextGenerator> PushOrchestrator<E, G> {
    pub fn new(executor: E, generator: CommitMessageGenerator<G>) -> Self {
        Self {
            executor,
            generator,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run the pipeline to a terminal state.
    pub async fn run(&self) -> Result<Completion, PushError> {
        let mut state = State::CheckRepo;

        loop {
            debug!(?state, "entering state");
            state = match state {
                State::CheckRepo => self.check_repo().await,
                State::CheckChanges => self.check_changes().await,
                State::Stage { status } => self.stage(status).await,
                State::GenerateMessage { status } => self.generate_message(status).await,
                State::Commit {
                    message,
                    files_changed,
                } => self.commit(message, files_changed).await,
                State::Push {
                    message,
                    files_changed,
                } => self.push(message, files_changed).await,
                State::PushRetry {
                    message,
                    files_changed,
                    push_output,
                } => self.push_retry(message, files_changed, push_output).await,
                State::Done(completion) => return Ok(completion),
                State::Abort(error) => return Err(error),
            };
        }
    }

    async fn check_repo(&self) -> State {
        let result = self.executor.execute(&GitCommand::IsInsideWorkTree).await;

        if !result.is_ok() {
            return State::Abort(PushError::NotARepository(result.detail().trim().to_string()));
        }
        if result.stdout.trim() != "true" {
            return State::Abort(PushError::NotARepository(format!(
                "not inside a work tree ({})",
                result.text.trim()
            )));
        }

        println!("  [PASS] Git repository detected");
        State::CheckChanges
    }

    async fn check_changes(&self) -> State {
        let result = self.executor.execute(&GitCommand::StatusPorcelain).await;
        if !result.is_ok() {
            return State::Abort(PushError::StatusFailed(result.detail().trim().to_string()));
        }

        let status = RepositoryStatus::new(result.stdout);
        if !status.has_changes() {
            info!("working tree clean");
            return State::Done(Completion::UpToDate);
        }

        println!("  [PASS] {} changed file(s)", status.file_count());
        for entry in status.entries() {
            debug!("{}{} {}", entry.index, entry.worktree, entry.path);
        }
        State::Stage { status }
    }

    async fn stage(&self, status: RepositoryStatus) -> State {
        let result = self.executor.execute(&GitCommand::AddAll).await;
        if !result.is_ok() {
            return State::Abort(PushError::StagingFailed(result.detail().trim().to_string()));
        }

        println!("  [DONE] Staged all changes");
        State::GenerateMessage { status }
    }

    async fn generate_message(&self, before_staging: RepositoryStatus) -> State {
        // Staging changes what status reports, so ask again.
        let result = self.executor.execute(&GitCommand::StatusPorcelain).await;
        let status = if result.is_ok() {
            RepositoryStatus::new(result.stdout)
        } else {
            warn!("status after staging failed, using earlier status: {}", result.text);
            before_staging
        };

        let diff_stat = self.executor.execute(&GitCommand::DiffStatCached).await;
        let diff_stat = if diff_stat.is_ok() {
            diff_stat.stdout
        } else {
            warn!("diff-stat failed, continuing without it: {}", diff_stat.text);
            String::new()
        };

        println!("  Generating commit message...");
        let Some(message) = self.generator.generate(status.raw(), &diff_stat).await else {
            info!("nothing left to commit after staging");
            return State::Done(Completion::UpToDate);
        };

        if message.is_fallback() {
            println!("  [WARN] Could not generate a message, using \"{}\"", message);
        } else {
            println!("  [DONE] Message: {}", message.subject());
        }

        State::Commit {
            message,
            files_changed: status.file_count(),
        }
    }

    async fn commit(&self, message: CommitMessage, files_changed: usize) -> State {
        let command = GitCommand::Commit {
            message: message.text().to_string(),
        };
        let result = self.executor.execute(&command).await;
        if !result.is_ok() {
            return State::Abort(PushError::CommitFailed(result.detail().trim().to_string()));
        }

        println!("  [DONE] Created commit");
        State::Push {
            message,
            files_changed,
        }
    }

    async fn push(&self, message: CommitMessage, files_changed: usize) -> State {
        let result = self.executor.execute(&GitCommand::Push).await;
        if !result.is_ok() {
            println!("  [WARN] Push failed, retrying with upstream");
            return State::PushRetry {
                message,
                files_changed,
                push_output: result.detail().trim().to_string(),
            };
        }

        println!("  [DONE] Pushed");
        State::Done(Completion::Pushed {
            message,
            files_changed,
            outcome: PushOutcome::direct(),
        })
    }

    async fn push_retry(
        &self,
        message: CommitMessage,
        files_changed: usize,
        push_output: String,
    ) -> State {
        debug!("initial push failed: {}", push_output);

        let result = self.executor.execute(&GitCommand::CurrentBranch).await;
        let branch = if result.is_ok() {
            result.stdout.trim().to_string()
        } else {
            String::new()
        };
        if branch.is_empty() {
            return State::Abort(PushError::NoBranch(push_output));
        }

        let result = self
            .executor
            .execute(&GitCommand::push_set_upstream(branch.as_str()))
            .await;
        if !result.is_ok() {
            return State::Abort(PushError::PushFailed {
                branch,
                output: result.detail().trim().to_string(),
            });
        }

        println!("  [DONE] Pushed and set upstream to origin/{}", branch);
        State::Done(Completion::Pushed {
            message,
            files_changed,
            outcome: PushOutcome::via_upstream(branch),
        })
    }
}
