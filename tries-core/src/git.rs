use crate::constants::GIT_DIR_ENTRY;
use std::path::{Path, PathBuf};

/// Where a worktree-style experiment is created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeSource {
    pub repo_dir: PathBuf,
    /// Whether `repo_dir` carries a `.git` entry (directory, or file for linked worktrees)
    pub is_git: bool,
}

impl WorktreeSource {
    /// `dir` (or no argument) means the current directory; anything else is a repo path.
    pub fn resolve(arg: Option<&str>, cwd: &Path) -> Self {
        let repo_dir = match arg {
            None | Some("" | "dir") => cwd.to_path_buf(),
            Some(path) => cwd.join(path),
        };
        let is_git = has_git_dir(&repo_dir);
        Self { repo_dir, is_git }
    }

    /// Default experiment name: the source directory's own name.
    pub fn default_name(&self) -> Option<String> {
        self.repo_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

pub fn has_git_dir(dir: &Path) -> bool {
    dir.join(GIT_DIR_ENTRY).exists()
}
