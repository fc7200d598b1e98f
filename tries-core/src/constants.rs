/// Default location of the tries directory when nothing else is configured.
pub const DEFAULT_TRIES_PATH: &str = "~/src/tries";

/// Environment variable overriding the tries directory.
pub const TRY_PATH_ENV: &str = "TRY_PATH";

pub const GIT_DIR_ENTRY: &str = ".git";

/// Suffix stripped from remote repository names.
pub const GIT_SUFFIX: &str = ".git";

/// Separator between the date prefix, the base name and any numeric suffix.
pub const NAME_SEPARATOR: char = '-';

/// First numeric suffix tried when a name is taken.
pub const FIRST_DEDUP_SUFFIX: usize = 2;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
