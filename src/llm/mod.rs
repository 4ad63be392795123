//! Text-generation providers.

pub mod gemini;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use gemini::GeminiClient;

/// A service that turns a prompt into text.
///
/// The commit message generator takes one of these at construction, so tests
/// can substitute a stub for the real client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt and return the response text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
