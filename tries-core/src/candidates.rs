use crate::error::{Error, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// One selectable directory inside the tries directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub path: PathBuf,
}

/// Snapshot the immediate subdirectories of `base`, most recently modified first.
///
/// Entries with the same modification time are ordered by name. Symlinks pointing at
/// directories are included; plain files are skipped.
pub fn list_candidates(base: &Path) -> Result<Vec<Candidate>> {
    let entries = fs::read_dir(base).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::BasePathNotFound(base.to_path_buf()),
        _ => Error::Io {
            path: base.to_path_buf(),
            source,
        },
    })?;

    let mut found: Vec<(Option<SystemTime>, Candidate)> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {e}", base.display());
                continue;
            }
        };
        let path = entry.path();
        // Follows symlinks, so links to directories are kept
        let Ok(metadata) = fs::metadata(&path) else {
            log::debug!("skipping {}: no metadata", path.display());
            continue;
        };
        if !metadata.is_dir() {
            continue;
        }
        let candidate = Candidate {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        };
        found.push((metadata.modified().ok(), candidate));
    }
    found.sort_by(|(a_time, a), (b_time, b)| b_time.cmp(a_time).then_with(|| a.name.cmp(&b.name)));
    let candidates: Vec<Candidate> = found.into_iter().map(|(_, candidate)| candidate).collect();

    log::debug!(
        "found {} candidates in {}",
        candidates.len(),
        base.display()
    );
    Ok(candidates)
}

/// Delete a candidate directory and everything in it. A symlinked candidate loses only the
/// link.
pub fn remove_candidate(candidate: &Candidate) -> Result<()> {
    let is_link = fs::symlink_metadata(&candidate.path)
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false);
    let removed = if is_link {
        fs::remove_file(&candidate.path)
    } else {
        fs::remove_dir_all(&candidate.path)
    };
    removed.map_err(|source| Error::Io {
        path: candidate.path.clone(),
        source,
    })?;
    log::info!("deleted {}", candidate.path.display());
    Ok(())
}
