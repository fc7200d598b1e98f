use crate::{
    constants::GIT_SUFFIX,
    error::{Error, Result},
};
use regex::Regex;
use std::sync::LazyLock;

/// `scheme://[user@]host[:port]/owner/repo`
static SCHEME_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://(?:[^@/]+@)?([^/:@]+)(?::\d+)?/([^/]+)/([^/]+)")
        .unwrap()
});

/// `user@host:owner/repo`
static SCP_REMOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@/:]+@([^/:@]+):/?([^/]+)/([^/]+)").unwrap());

/// A git remote broken into the parts used to name a clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRemote {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl ParsedRemote {
    /// Base directory name for a clone without a custom name, e.g. `tobi-try`.
    pub fn slug(&self) -> String {
        format!("{}-{}", self.owner, self.repo)
    }
}

/// Split a remote URL into host, owner and repository.
///
/// Matching is structural so any host parses the same way as github.com.
pub fn parse_remote(url: &str) -> Result<ParsedRemote> {
    let trimmed = url.trim().trim_end_matches('/');
    let captures = SCHEME_REMOTE
        .captures(trimmed)
        .or_else(|| SCP_REMOTE.captures(trimmed))
        .ok_or_else(|| Error::InvalidRemoteUrl(url.to_string()))?;

    let host = captures[1].to_string();
    let owner = captures[2].to_string();
    let repo = captures[3]
        .strip_suffix(GIT_SUFFIX)
        .unwrap_or(&captures[3])
        .to_string();

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::InvalidRemoteUrl(url.to_string()));
    }

    Ok(ParsedRemote { host, owner, repo })
}

/// Cheap check for arguments that should be treated as a clone request.
pub fn looks_like_remote(arg: &str) -> bool {
    let arg = arg.trim();
    !arg.is_empty()
        && (arg.starts_with("https://")
            || arg.starts_with("http://")
            || arg.starts_with("ssh://")
            || arg.starts_with("git@")
            || arg.ends_with(GIT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(host: &str, owner: &str, repo: &str) -> ParsedRemote {
        ParsedRemote {
            host: host.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    #[test]
    fn test_https_with_git_suffix() {
        assert_eq!(
            parse_remote("https://github.com/tobi/try.git").unwrap(),
            parsed("github.com", "tobi", "try")
        );
    }

    #[test]
    fn test_https_without_suffix() {
        assert_eq!(
            parse_remote("https://github.com/user/repo").unwrap(),
            parsed("github.com", "user", "repo")
        );
    }

    #[test]
    fn test_scp_form() {
        assert_eq!(
            parse_remote("git@github.com:tobi/try.git").unwrap(),
            parsed("github.com", "tobi", "try")
        );
    }

    #[test]
    fn test_other_hosts_parse_identically() {
        assert_eq!(
            parse_remote("https://gitlab.com/group/project.git").unwrap(),
            parsed("gitlab.com", "group", "project")
        );
        assert_eq!(
            parse_remote("git@git.example.org:team/tool.git").unwrap(),
            parsed("git.example.org", "team", "tool")
        );
    }

    #[test]
    fn test_trailing_slash_and_port() {
        assert_eq!(
            parse_remote("ssh://git@example.com:2222/owner/name.git/").unwrap(),
            parsed("example.com", "owner", "name")
        );
    }

    #[test]
    fn test_extra_path_segments_ignored() {
        assert_eq!(
            parse_remote("https://github.com/user/repo/tree/main").unwrap(),
            parsed("github.com", "user", "repo")
        );
    }

    #[test]
    fn test_invalid_urls_rejected() {
        for url in [
            "",
            "not a url",
            "https://github.com/only-owner",
            "github.com/user/repo",
            "git@github.com",
        ] {
            assert!(
                matches!(parse_remote(url), Err(Error::InvalidRemoteUrl(_))),
                "expected failure for {url:?}"
            );
        }
    }

    #[test]
    fn test_bare_git_suffix_repo_rejected() {
        assert!(parse_remote("https://github.com/user/.git").is_err());
    }

    #[test]
    fn test_slug() {
        let remote = parse_remote("https://github.com/user/repo.git").unwrap();
        assert_eq!(remote.slug(), "user-repo");
    }

    #[test]
    fn test_looks_like_remote() {
        assert!(looks_like_remote("https://github.com/a/b"));
        assert!(looks_like_remote("git@github.com:a/b.git"));
        assert!(looks_like_remote("something.git"));
        assert!(!looks_like_remote("redis-pool"));
        assert!(!looks_like_remote(""));
    }
}
