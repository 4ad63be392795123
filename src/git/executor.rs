//! Running git commands and normalizing their outcome.
//!
//! All operations shell out to the system `git` binary, inheriting the user's
//! existing git config, SSH agent, and credential store.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::CommandError;

use super::command::GitCommand;

/// Text reported for a command that succeeded without printing anything.
pub const EXECUTED_MARKER: &str = "Command executed successfully";

/// Outcome of a single git invocation.
#[derive(Debug)]
pub struct CommandResult {
    /// stdout if non-empty, else stderr, else [`EXECUTED_MARKER`]; the error
    /// description on failure.
    pub text: String,
    /// Raw standard output, for queries where empty output is meaningful.
    pub stdout: String,
    /// Set when the command could not run or exited non-zero.
    pub failure: Option<CommandError>,
}

impl CommandResult {
    /// Build a result for a command that exited successfully.
    pub fn success(stdout: impl Into<String>, stderr: &str) -> Self {
        let stdout = stdout.into();
        Self {
            text: normalize_output(&stdout, stderr),
            stdout,
            failure: None,
        }
    }

    /// Build a result for a command that failed.
    pub fn failed(error: CommandError, stdout: impl Into<String>) -> Self {
        Self {
            text: error.to_string(),
            stdout: stdout.into(),
            failure: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }

    /// Diagnostic output worth showing the user: git's own output for a
    /// non-zero exit, the error description otherwise.
    pub fn detail(&self) -> &str {
        match &self.failure {
            Some(CommandError::NonZeroExit { output, .. }) if !output.is_empty() => output,
            _ => &self.text,
        }
    }
}

/// Pick the text a successful command is reported with.
pub fn normalize_output(stdout: &str, stderr: &str) -> String {
    if !stdout.is_empty() {
        stdout.to_string()
    } else if !stderr.is_empty() {
        stderr.to_string()
    } else {
        EXECUTED_MARKER.to_string()
    }
}

/// Trait for executing git commands.
///
/// This abstraction allows substituting the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run the command to completion. Never fails: problems are encoded in
    /// the returned [`CommandResult`].
    async fn execute(&self, command: &GitCommand) -> CommandResult;
}

/// Executor that spawns the real `git` binary.
#[derive(Debug, Clone)]
pub struct SystemExecutor {
    program: PathBuf,
    workdir: Option<PathBuf>,
}

impl SystemExecutor {
    /// Run `git` in the process's current directory.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
            workdir: None,
        }
    }

    /// Run `git` inside `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
            ..Self::new()
        }
    }

    /// Use a different binary in place of `git`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for SystemExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for SystemExecutor {
    async fn execute(&self, command: &GitCommand) -> CommandResult {
        debug!(%command, "running git");

        let mut process = Command::new(&self.program);
        process
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            process.current_dir(dir);
        }

        let output = match process.output().await {
            Ok(output) => output,
            Err(e) => {
                debug!(%command, error = %e, "git could not be spawned");
                return CommandResult::failed(
                    CommandError::SpawnFailed {
                        command: command.to_string(),
                        source: e,
                    },
                    String::new(),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        debug!(%command, status = %output.status, "git finished");

        if output.status.success() {
            return CommandResult::success(stdout, &stderr);
        }

        let combined = [stderr.trim(), stdout.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        CommandResult::failed(
            CommandError::NonZeroExit {
                command: command.to_string(),
                code: output.status.code(),
                output: combined,
            },
            stdout,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefers_stdout() {
        assert_eq!(normalize_output("out\n", "err\n"), "out\n");
    }

    #[test]
    fn test_normalize_falls_back_to_stderr() {
        // git push reports progress on stderr even when it succeeds
        assert_eq!(normalize_output("", "To origin\n"), "To origin\n");
    }

    #[test]
    fn test_normalize_uses_marker_when_silent() {
        assert_eq!(normalize_output("", ""), EXECUTED_MARKER);
    }

    #[test]
    fn test_success_keeps_raw_stdout_empty() {
        let result = CommandResult::success("", "");
        assert!(result.is_ok());
        assert_eq!(result.text, EXECUTED_MARKER);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn test_failed_text_describes_error() {
        let result = CommandResult::failed(
            CommandError::NonZeroExit {
                command: "git push".to_string(),
                code: Some(128),
                output: "fatal: no upstream".to_string(),
            },
            "",
        );
        assert!(!result.is_ok());
        assert_eq!(result.text, "`git push` exited with code 128: fatal: no upstream");
        assert_eq!(result.detail(), "fatal: no upstream");
    }

    #[test]
    fn test_signal_exit_reports_unknown_status() {
        let err = CommandError::NonZeroExit {
            command: "git push".to_string(),
            code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("unknown status"));
    }

    #[tokio::test]
    async fn test_outside_repository_fails_with_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let executor = SystemExecutor::in_dir(dir.path());

        let result = executor.execute(&GitCommand::IsInsideWorkTree).await;

        assert!(!result.is_ok());
        assert!(matches!(
            result.failure,
            Some(CommandError::NonZeroExit { code: Some(_), .. })
        ));
    }

    #[tokio::test]
    async fn test_inside_repository_prints_true() {
        let dir = tempfile::tempdir().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        let executor = SystemExecutor::in_dir(dir.path());

        let result = executor.execute(&GitCommand::IsInsideWorkTree).await;

        assert!(result.is_ok(), "unexpected failure: {}", result.text);
        assert_eq!(result.stdout.trim(), "true");
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_failure() {
        let executor = SystemExecutor::new().with_program("aipush-no-such-binary");

        let result = executor.execute(&GitCommand::StatusPorcelain).await;

        assert!(matches!(result.failure, Some(CommandError::SpawnFailed { .. })));
        assert!(result.text.contains("git status --porcelain"));
    }
}
