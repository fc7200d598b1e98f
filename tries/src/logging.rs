use std::{path::PathBuf, str::FromStr};

const APP_NAME: &str = "tries";
const LOG_FILE_NAME: &str = "tries.log";

pub const LOG_LEVEL_ENV: &str = "TRIES_LOG";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

pub fn cache_dir() -> Option<PathBuf> {
    cache_dir_from(std::env::var("XDG_CACHE_HOME").ok().as_deref())
}

/// Cache directory given the value of `$XDG_CACHE_HOME`
fn cache_dir_from(xdg_cache_home: Option<&str>) -> Option<PathBuf> {
    #[cfg(unix)]
    {
        if let Some(xdg_cache_home) = xdg_cache_home
            && !xdg_cache_home.is_empty()
        {
            return Some(PathBuf::from(xdg_cache_home).join(APP_NAME));
        }
        dirs::home_dir().map(|home| home.join(".cache").join(APP_NAME))
    }
    #[cfg(windows)]
    {
        let _ = xdg_cache_home;
        Some(
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME),
        )
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Level named by `$TRIES_LOG`, falling back to warn for unset or unparseable values
pub fn level_from_env(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|raw| log::LevelFilter::from_str(raw.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let log_file =
        default_log_file().ok_or_else(|| anyhow::anyhow!("Unable to find a cache directory"))?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("tries logging initialised (level={level})");
    Ok(())
}

/// Start file logging from the environment. Stdout and stderr belong to the shell
/// wrapper, so a logger that cannot start is skipped silently.
pub fn init_from_env() {
    let level = level_from_env(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    if level == log::LevelFilter::Off {
        return;
    }
    let _ = setup_logging(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn cache_dir_respects_xdg_override() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("custom-cache");
        let result = cache_dir_from(custom.to_str());
        assert_eq!(result, Some(custom.join(APP_NAME)));
    }

    #[test]
    #[cfg(unix)]
    fn cache_dir_ignores_empty_xdg() {
        for value in [Some(""), None] {
            let result = cache_dir_from(value).expect("home dir in test env");
            assert!(
                result.ends_with(format!(".cache/{APP_NAME}").as_str()),
                "expected default .cache/tries path, got: {result:?}"
            );
        }
    }

    #[test]
    fn default_log_file_ends_with_log_filename() {
        let path = default_log_file().expect("cache dir in test env");
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        assert!(path.parent().unwrap().ends_with(APP_NAME));
    }

    #[test]
    fn level_from_env_parses_names() {
        assert_eq!(level_from_env(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(level_from_env(Some(" INFO ")), log::LevelFilter::Info);
        assert_eq!(level_from_env(Some("off")), log::LevelFilter::Off);
    }

    #[test]
    fn level_from_env_defaults_to_warn() {
        assert_eq!(level_from_env(None), DEFAULT_LOG_LEVEL);
        assert_eq!(level_from_env(Some("chatty")), DEFAULT_LOG_LEVEL);
    }
}
