//! Best-effort commit message generation.

use tracing::{debug, warn};

use crate::llm::TextGenerator;

use super::message::CommitMessage;
use super::prompt::build_commit_prompt;

/// Generates commit messages from repository state.
///
/// Never fails: any problem with the generation service collapses to
/// [`CommitMessage::fallback`].
pub struct CommitMessageGenerator<G> {
    client: G,
}

impl<G: TextGenerator> CommitMessageGenerator<G> {
    pub fn new(client: G) -> Self {
        Self { client }
    }

    /// Generate a message for the given porcelain status and diff-stat.
    ///
    /// Returns `None` when `status` is blank, meaning there is nothing to
    /// commit.
    pub async fn generate(&self, status: &str, diff_stat: &str) -> Option<CommitMessage> {
        if status.trim().is_empty() {
            return None;
        }

        let prompt = build_commit_prompt(status, diff_stat);
        debug!("Commit prompt length: {} chars", prompt.len());

        let message = match self.client.generate(&prompt).await {
            Ok(response) => CommitMessage::from_response(&response).unwrap_or_else(|| {
                warn!("Generated commit message was empty, using fallback");
                CommitMessage::fallback()
            }),
            Err(e) => {
                warn!("Commit message generation failed: {}. Using fallback", e);
                CommitMessage::fallback()
            }
        };

        Some(message)
    }
}
