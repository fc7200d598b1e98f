use crate::{
    constants::{DATE_FORMAT, FIRST_DEDUP_SUFFIX, NAME_SEPARATOR},
    error::{Error, Result},
};
use chrono::{Local, NaiveDate};
use std::{
    fs,
    path::{Component, Path},
};

/// How the base name is turned into a directory name before deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// `YYYY-MM-DD-<base>`, used for clones and fresh experiments
    Dated(NaiveDate),
    /// `<base>` verbatim, used when the caller supplied a custom clone name
    Plain,
}

impl NameStyle {
    /// Dated style for the local calendar day.
    pub fn today() -> Self {
        Self::Dated(Local::now().date_naive())
    }

    fn apply(self, base: &str) -> String {
        match self {
            Self::Dated(date) => format!("{}{NAME_SEPARATOR}{base}", date.format(DATE_FORMAT)),
            Self::Plain => base.to_string(),
        }
    }
}

/// Collapse whitespace runs in a user-typed name into single separators.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(&NAME_SEPARATOR.to_string())
}

/// True when `name` is exactly one normal path component, so joining it onto the tries
/// directory can neither nest nor escape.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}

/// Any entry counts as taken, including symlinks whose target is gone.
fn is_taken(base_dir: &Path, name: &str) -> bool {
    fs::symlink_metadata(base_dir.join(name)).is_ok()
}

/// Split `test12` into `("test", 12)`.
fn numeric_stem(base: &str) -> Option<(&str, u64)> {
    let stem = base.trim_end_matches(|c: char| c.is_ascii_digit());
    let number = base[stem.len()..].parse().ok()?;
    Some((stem, number))
}

/// Pick a name under `base_dir` that no existing entry uses.
///
/// The styled name is tried first. A dated base that ends in a number is versioned by
/// bumping that number (`test1` -> `test2` -> `test3`); otherwise `<name>-2`, `<name>-3`, ...
/// are tried in order. Only an entry with exactly the candidate name counts as a collision.
pub fn allocate_name(base_dir: &Path, base: &str, style: NameStyle) -> Result<String> {
    let base = normalize_name(base);
    if base.is_empty() {
        return Err(Error::EmptyName);
    }
    if !is_single_component(&base) {
        return Err(Error::InvalidName(base));
    }

    let name = style.apply(&base);
    if !is_taken(base_dir, &name) {
        return Ok(name);
    }

    if let NameStyle::Dated(_) = style
        && let Some((stem, number)) = numeric_stem(&base)
    {
        for next in number.saturating_add(1)..=u64::MAX {
            let candidate = style.apply(&format!("{stem}{next}"));
            if !is_taken(base_dir, &candidate) {
                log::debug!("{name} is taken in {}, versioned to {candidate}", base_dir.display());
                return Ok(candidate);
            }
        }
    }

    let mut suffix = FIRST_DEDUP_SUFFIX;
    loop {
        let candidate = format!("{name}{NAME_SEPARATOR}{suffix}");
        if !is_taken(base_dir, &candidate) {
            log::debug!("{name} is taken in {}, using {candidate}", base_dir.display());
            return Ok(candidate);
        }
        suffix += 1;
    }
}
