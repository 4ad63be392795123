//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use async_trait::async_trait;
use git2::{Oid, Repository, Signature};

use aipush::error::GenerationError;
use aipush::llm::TextGenerator;

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    ///
    /// Local config pins identity and push behaviour so the user's global
    /// git config cannot change the outcome.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config.set_bool("commit.gpgsign", false).expect("Failed to set commit.gpgsign");
        config.set_str("push.default", "simple").expect("Failed to set push.default");
        config
            .set_bool("push.autoSetupRemote", false)
            .expect("Failed to set push.autoSetupRemote");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the repository root.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig =
            Signature::now("Test User", "test@example.com").expect("Failed to create signature");

        // Create or update a file to have something to commit
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        self.write_file("test.txt", &content);

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new("test.txt")).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Add a bare repository as `origin`. Keep the returned dir alive.
    pub fn add_bare_remote(&self) -> tempfile::TempDir {
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        self.add_remote_url(remote_dir.path().to_str().expect("Invalid remote path"));
        remote_dir
    }

    pub fn add_remote_url(&self, url: &str) {
        self.repo.remote("origin", url).expect("Failed to add origin remote");
    }

    pub fn current_branch(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(String::from))
            .expect("HEAD should point at a branch")
    }

    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.message().unwrap_or_default().trim().to_string())
            .expect("HEAD should have a commit")
    }

    pub fn head_id(&self) -> Oid {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.id())
            .expect("HEAD should have a commit")
    }
}

/// Read the commit message at `refs/heads/<branch>` of a bare remote.
pub fn remote_branch_message(remote: &Path, branch: &str) -> Option<String> {
    let bare = Repository::open_bare(remote).ok()?;
    let reference = bare.find_reference(&format!("refs/heads/{}", branch)).ok()?;
    let commit = reference.peel_to_commit().ok()?;
    Some(commit.message()?.trim().to_string())
}

/// Generator with a canned answer.
pub struct StubGenerator {
    response: Option<String>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.response.clone().ok_or(GenerationError::EmptyResponse)
    }
}
