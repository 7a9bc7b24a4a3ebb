//! Pass and run summaries.

use std::path::PathBuf;

/// What one pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Entities found by the scan
    pub entities: usize,
    /// Entities whose previous dependency record was reused verbatim
    pub reused: usize,
    /// Templates parsed
    pub parsed: usize,
    /// The scan matched the previous snapshot and nothing was done
    pub skipped: bool,
    /// Placeholder files created
    pub created: Vec<PathBuf>,
    /// Files whose generated statements were updated
    pub written: Vec<PathBuf>,
    /// Files deleted after becoming empty
    pub deleted: Vec<PathBuf>,
}

impl PassReport {
    /// Whether the pass changed the tree's structure, which requires
    /// another pass.
    pub fn needs_repeat(&self) -> bool {
        !self.created.is_empty() || !self.deleted.is_empty()
    }
}

/// All passes of one [`Generator::run`](super::Generator::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Passes in execution order; the last one requested no repeat
    pub passes: Vec<PassReport>,
}

impl RunReport {
    /// Number of passes executed.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Every file created during the run.
    pub fn created(&self) -> impl Iterator<Item = &PathBuf> {
        self.passes.iter().flat_map(|pass| pass.created.iter())
    }

    /// Every file write during the run. A file written in several passes is
    /// listed once per pass.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.passes.iter().flat_map(|pass| pass.written.iter())
    }

    /// Every file deleted during the run.
    pub fn deleted(&self) -> impl Iterator<Item = &PathBuf> {
        self.passes.iter().flat_map(|pass| pass.deleted.iter())
    }

    /// Templates parsed across all passes.
    pub fn parsed(&self) -> usize {
        self.passes.iter().map(|pass| pass.parsed).sum()
    }

    /// Whether the run left every file untouched.
    pub fn is_noop(&self) -> bool {
        self.passes
            .iter()
            .all(|pass| pass.created.is_empty() && pass.written.is_empty() && pass.deleted.is_empty())
    }
}
