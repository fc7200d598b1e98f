use crate::{
    error::Result,
    naming::{NameStyle, allocate_name},
    outcome::Outcome,
};
use std::path::{Path, PathBuf};

const STEP_SEPARATOR: &str = " && ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Mkdir,
    GitClone { remote: String },
    GitWorktree { repo_dir: PathBuf },
    /// Bump the mtime so the directory lists first next time
    Touch,
    Cd,
}

/// Ordered shell steps that all operate on one target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPlan {
    pub target: PathBuf,
    pub steps: Vec<Step>,
}

impl ShellPlan {
    pub fn cd(target: PathBuf) -> Self {
        Self {
            target,
            steps: vec![Step::Touch, Step::Cd],
        }
    }

    pub fn create(target: PathBuf) -> Self {
        Self {
            target,
            steps: vec![Step::Mkdir, Step::Touch, Step::Cd],
        }
    }

    pub fn clone_remote(remote: &str, target: PathBuf) -> Self {
        Self {
            target,
            steps: vec![
                Step::GitClone {
                    remote: remote.to_string(),
                },
                Step::Touch,
                Step::Cd,
            ],
        }
    }

    /// Detached worktree when `repo_dir` is a git checkout, a plain directory otherwise.
    pub fn worktree(repo_dir: &Path, is_git: bool, target: PathBuf) -> Self {
        if !is_git {
            return Self::create(target);
        }
        Self {
            target,
            steps: vec![
                Step::GitWorktree {
                    repo_dir: repo_dir.to_path_buf(),
                },
                Step::Touch,
                Step::Cd,
            ],
        }
    }

    /// Render as one line, steps chained with `&&`.
    pub fn render(&self) -> String {
        let target = shell_quote(&self.target.to_string_lossy());
        self.steps
            .iter()
            .map(|step| match step {
                Step::Mkdir => format!("mkdir -p {target}"),
                Step::GitClone { remote } => {
                    format!("git clone {} {target}", shell_quote(remote))
                }
                Step::GitWorktree { repo_dir } => format!(
                    "git -C {} worktree add --detach {target}",
                    shell_quote(&repo_dir.to_string_lossy())
                ),
                Step::Touch => format!("touch {target}"),
                Step::Cd => format!("cd {target}"),
            })
            .collect::<Vec<_>>()
            .join(STEP_SEPARATOR)
    }
}

/// Plan for an interactive outcome. `Cancelled` yields no plan and therefore no output.
pub fn plan_for_outcome(
    outcome: &Outcome,
    base_dir: &Path,
    style: NameStyle,
) -> Result<Option<ShellPlan>> {
    let plan = match outcome {
        Outcome::Selected(candidate) => Some(ShellPlan::cd(candidate.path.clone())),
        Outcome::CreateNew(name) => {
            let name = allocate_name(base_dir, name, style)?;
            Some(ShellPlan::create(base_dir.join(name)))
        }
        Outcome::Cancelled => None,
    };
    Ok(plan)
}

/// Single-quote for POSIX shells and fish.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}
