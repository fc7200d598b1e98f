use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Neither the `scheme://host/owner/repo` nor the `user@host:owner/repo` form matched
    #[error("Unable to parse git remote URL: {0}")]
    InvalidRemoteUrl(String),

    /// A directory name was requested for an empty base
    #[error("Directory name must not be empty")]
    EmptyName,

    /// The name would not be a single directory directly inside the tries directory
    #[error("Invalid directory name: {0:?} (must not contain path separators)")]
    InvalidName(String),

    /// The tries directory does not exist
    #[error("Base path not found: {}", .0.display())]
    BasePathNotFound(PathBuf),

    /// Enter was pressed with nothing typed and nothing to select
    #[error("Nothing matches and no name was typed")]
    EmptyQueryNoMatch,

    /// A render template referenced a placeholder with no resolver
    #[error("Unknown template token: {{{0}}}")]
    UnknownToken(String),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_message_shows_braces() {
        let err = Error::UnknownToken("bogus".to_string());
        assert_eq!(err.to_string(), "Unknown template token: {bogus}");
    }

    #[test]
    fn invalid_name_message_quotes_name() {
        let err = Error::InvalidName("../x".to_string());
        assert!(err.to_string().contains("\"../x\""));
    }

    #[test]
    fn base_path_message_includes_path() {
        let err = Error::BasePathNotFound(PathBuf::from("/nope/tries"));
        assert!(err.to_string().contains("/nope/tries"));
    }
}
