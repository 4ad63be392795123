//! Git operations via the system `git` binary.

pub mod command;
pub mod executor;
pub mod status;

pub use command::{DEFAULT_REMOTE, GitCommand};
pub use executor::{CommandExecutor, CommandResult, EXECUTED_MARKER, SystemExecutor};
pub use status::{RepositoryStatus, StatusEntry};

#[cfg(test)]
pub use executor::MockCommandExecutor;
