mod cli;
mod logging;

use clap::{Parser, Subcommand};
use cli::{CdArgs, CliError, CliResult, RunContext};
use std::{path::PathBuf, process::ExitCode};
use tries_core::{config, constants::TRY_PATH_ENV, paths};

#[derive(Parser)]
#[command(
    name = "tries",
    version,
    about = "Jump between dated experiment directories"
)]
struct Cli {
    /// Override path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the tries (default: $TRY_PATH, then config, then ~/src/tries)
    #[arg(long, global = true)]
    path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a git remote into a new dated directory
    Clone {
        url: String,
        /// Use this name instead of the dated owner-repo name
        name: Option<String>,
    },
    /// Pick an existing try, or create one named after the query
    Cd {
        query: Vec<String>,
        /// Start with this query typed
        #[arg(long)]
        and_type: Option<String>,
        /// Comma-separated keys to replay instead of reading the terminal
        #[arg(long)]
        and_keys: Option<String>,
        /// Render one frame and exit without printing a command
        #[arg(long)]
        and_exit: bool,
        /// Answer delete prompts in scripted runs (YES confirms)
        #[arg(long)]
        and_confirm: Option<String>,
    },
    /// Create a dated try from a directory, as a git worktree when it is a repository
    Worktree {
        /// `dir` for the current directory, or a path to a repository
        source: String,
        name: Vec<String>,
    },
    /// Print the `try` shell function for bash, zsh or fish
    Init { dir: Option<String> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_from_env();

    match run(cli) {
        Ok(Some(line)) => {
            println!("{line}");
            ExitCode::from(0)
        }
        Ok(None) => ExitCode::from(0),
        Err(error) => {
            log::warn!("exiting with code {}: {error}", error.code());
            cli::print_error(&error);
            let code: u8 = match error.code() {
                1 => 1,
                _ => 2,
            };
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> CliResult<Option<String>> {
    let config = config::load_config(cli.config.as_deref())
        .map_err(|error| CliError::system(format!("{error:#}")))?;
    let cwd = std::env::current_dir()
        .map_err(|error| CliError::system(format!("Unable to read current directory: {error}")))?;
    let env_path = std::env::var(TRY_PATH_ENV).ok();
    let base = paths::tries_base_path(
        cli.path.as_deref(),
        env_path.as_deref(),
        config.path.as_deref(),
        &cwd,
    )
    .ok_or_else(|| CliError::system("Unable to find home directory"))?;
    log::debug!("tries directory: {}", base.display());

    let ctx = RunContext { base, cwd, config };
    match cli.command {
        Commands::Clone { url, name } => cli::cmd_clone(&ctx, &url, name.as_deref()),
        Commands::Cd {
            query,
            and_type,
            and_keys,
            and_exit,
            and_confirm,
        } => {
            let args = CdArgs {
                query,
                and_type,
                and_keys,
                and_exit,
                and_confirm,
            };
            cli::cmd_cd(&ctx, &args)
        }
        Commands::Worktree { source, name } => cli::cmd_worktree(&ctx, &source, &name),
        Commands::Init { dir } => cli::cmd_init(&ctx, dir.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_path_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["tries", "cd", "--path", "/tmp/t", "pool"]).unwrap();
        assert_eq!(cli.path.as_deref(), Some("/tmp/t"));
        match cli.command {
            Commands::Cd { query, .. } => assert_eq!(query, ["pool"]),
            _ => panic!("expected cd"),
        }
    }

    #[test]
    fn clone_takes_optional_name() {
        let cli = Cli::try_parse_from(["tries", "clone", "git@github.com:u/r.git", "mine"]).unwrap();
        match cli.command {
            Commands::Clone { url, name } => {
                assert_eq!(url, "git@github.com:u/r.git");
                assert_eq!(name.as_deref(), Some("mine"));
            }
            _ => panic!("expected clone"),
        }
    }
}
