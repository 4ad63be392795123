//! Console reporting for finished runs.

use crate::commit::MessageOrigin;
use crate::config::API_KEY_ENV_VAR;
use crate::error::PushError;

use super::outcome::Completion;

/// Print the summary for a successful run.
pub fn print_completion(completion: &Completion) {
    match completion {
        Completion::UpToDate => {
            println!("Everything is up to date. Nothing to commit.");
        }
        Completion::Pushed {
            message,
            files_changed,
            outcome,
        } => {
            println!();
            println!("Summary:");
            println!(
                "  Message: {}{}",
                message.subject(),
                match message.origin() {
                    MessageOrigin::Generated => "",
                    MessageOrigin::Fallback => " (fallback)",
                }
            );
            println!("  Files:   {}", files_changed);
            match &outcome.branch {
                Some(branch) if outcome.used_upstream_retry => {
                    println!("  Status:  pushed (upstream set to origin/{})", branch)
                }
                _ => println!("  Status:  pushed"),
            }
        }
    }
}

/// Print an aborted run, with remediation hints where there are any.
pub fn print_abort(error: &PushError) {
    eprintln!("  [FAIL] {}", error);

    let hints = remediation_hints(error);
    if !hints.is_empty() {
        eprintln!();
        eprintln!("To fix this:");
        for hint in hints {
            eprintln!("  - {}", hint);
        }
    }
}

/// Print a failure that is not one of the pipeline's own abort states.
pub fn print_unexpected(error: &anyhow::Error) {
    eprintln!();
    eprintln!("Something went wrong: {:#}", error);
    eprintln!();
    print_setup_guidance();
}

/// Print the setup checklist.
pub fn print_setup_guidance() {
    eprintln!("Make sure that:");
    eprintln!("  1. A .env file (or your environment) sets {}", API_KEY_ENV_VAR);
    eprintln!("  2. git is installed and on your PATH");
    eprintln!("  3. You are running aipush inside a git repository");
}

/// Suggested next steps for an abort.
pub fn remediation_hints(error: &PushError) -> Vec<String> {
    match error {
        PushError::NotARepository(_) => vec!["Run aipush from inside a git repository".to_string()],
        PushError::PushFailed { branch, .. } => vec![
            "Check that a remote is configured: git remote -v".to_string(),
            "Add one if needed: git remote add origin <url>".to_string(),
            "Verify you are authenticated with the remote (SSH key or credential helper)"
                .to_string(),
            format!("Then push manually: git push -u origin {}", branch),
        ],
        PushError::NoBranch(_) => vec![
            "Check out a branch instead of a detached HEAD: git switch -c <branch>".to_string(),
            "Then push manually: git push -u origin <branch>".to_string(),
        ],
        PushError::StatusFailed(_) | PushError::StagingFailed(_) | PushError::CommitFailed(_) => {
            Vec::new()
        }
    }
}
