//! Porcelain status parsing.

/// One line of `git status --porcelain` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Staged state (`X` column).
    pub index: char,
    /// Unstaged state (`Y` column).
    pub worktree: char,
    /// Path relative to the repository root. For renames, the new path.
    pub path: String,
}

impl StatusEntry {
    fn parse(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        let rest = chars.as_str().trim();
        if rest.is_empty() {
            return None;
        }

        let path = match rest.split_once(" -> ") {
            Some((_, to)) => to,
            None => rest,
        };

        Some(Self {
            index,
            worktree,
            path: path.trim_matches('"').to_string(),
        })
    }

    pub fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }
}

/// Snapshot of `git status --porcelain`.
///
/// Staging changes what this reports, so it is re-queried rather than reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    raw: String,
}

impl RepositoryStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn has_changes(&self) -> bool {
        !self.raw.trim().is_empty()
    }

    /// Parsed entries, skipping lines too short to be status records.
    ///
    /// A line whose `X` column is blank (unstaged-only change) is parsed as
    /// well, so only surrounding newlines are trimmed here.
    pub fn entries(&self) -> Vec<StatusEntry> {
        self.raw
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .filter_map(StatusEntry::parse)
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.entries().len()
    }
}
