use std::path::{Path, PathBuf};
use tries_core::{
    Config, Error, NameStyle, Outcome, Selector, ShellPlan, allocate_name,
    command::{plan_for_outcome, shell_quote},
    git::WorktreeSource,
    keyboard::{parse_key_script, with_delete_answer},
    list_candidates, parse_remote,
    remote::looks_like_remote,
};
use tries_tui::{Screen, ScriptedKeys, Theme, View, template::Templates};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
    code: i32,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<Error> for CliError {
    fn from(value: Error) -> Self {
        match value {
            Error::Io { .. } => Self::system(value.to_string()),
            _ => Self::user(value.to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        match value.downcast::<Error>() {
            Ok(error) => error.into(),
            Err(other) => Self::system(format!("{other:#}")),
        }
    }
}

/// Everything a command needs that was resolved before dispatch.
pub struct RunContext {
    pub base: PathBuf,
    pub cwd: PathBuf,
    pub config: Config,
}

#[derive(Debug, Clone, Default)]
pub struct CdArgs {
    pub query: Vec<String>,
    pub and_type: Option<String>,
    pub and_keys: Option<String>,
    pub and_exit: bool,
    /// Scripted answer to delete prompts; only `YES` confirms
    pub and_confirm: Option<String>,
}

/// Query words that mean "worktree of the current directory"
const CWD_WORDS: [&str; 2] = [".", "./"];

pub fn print_error(error: &CliError) {
    eprintln!("Error: {}", error.message());
}

/// Join free-form name words the way they are typed into the selector.
fn join_words(words: &[String]) -> Option<String> {
    let joined = words.join(" ");
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn cmd_clone(ctx: &RunContext, url: &str, name: Option<&str>) -> CliResult<Option<String>> {
    let remote = parse_remote(url)?;
    let (base, style) = match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(custom) => (custom.to_string(), NameStyle::Plain),
        None => (remote.slug(), NameStyle::today()),
    };
    let dir = allocate_name(&ctx.base, &base, style)?;
    log::info!("cloning {url} from {} into {dir}", remote.host);
    let plan = ShellPlan::clone_remote(url.trim(), ctx.base.join(dir));
    Ok(Some(plan.render()))
}

pub fn cmd_cd(ctx: &RunContext, args: &CdArgs) -> CliResult<Option<String>> {
    if let Some(first) = args.query.first()
        && looks_like_remote(first)
    {
        let name = join_words(&args.query[1..]);
        return cmd_clone(ctx, first, name.as_deref());
    }
    if let Some(first) = args.query.first()
        && CWD_WORDS.contains(&first.as_str())
    {
        return cmd_worktree(ctx, first, &args.query[1..]);
    }

    let initial_query = args
        .and_type
        .clone()
        .or_else(|| join_words(&args.query))
        .unwrap_or_default()
        .replace(' ', "-");

    let candidates = list_candidates(&ctx.base)?;
    log::debug!(
        "{} candidates in {}, initial query {initial_query:?}",
        candidates.len(),
        ctx.base.display()
    );
    let mut selector = Selector::new(candidates, &initial_query);
    let view = View {
        theme: Theme::from_config(&ctx.config.theme),
        templates: Templates::default(),
    };

    let outcome = if args.and_exit {
        Screen::new(std::io::stderr(), view)
            .without_clear()
            .draw(&selector)?;
        Outcome::Cancelled
    } else if let Some(script) = &args.and_keys {
        let mut actions = parse_key_script(script);
        if let Some(answer) = &args.and_confirm {
            actions = with_delete_answer(actions, answer == "YES");
        }
        let mut keys = ScriptedKeys::new(actions);
        let mut screen = Screen::new(std::io::stderr(), view).without_clear();
        tries_tui::run(&mut selector, &mut keys, &mut screen, &ctx.base)?
    } else {
        tries_tui::run_interactive(&mut selector, view, &ctx.base)?
    };

    let plan = plan_for_outcome(&outcome, &ctx.base, NameStyle::today())?;
    Ok(plan.map(|plan| plan.render()))
}

pub fn cmd_worktree(ctx: &RunContext, source: &str, name: &[String]) -> CliResult<Option<String>> {
    let mut source = WorktreeSource::resolve(Some(source), &ctx.cwd);
    if let Ok(canonical) = dunce::canonicalize(&source.repo_dir) {
        source.repo_dir = canonical;
    }

    let base = match join_words(name) {
        Some(custom) => custom,
        None => source.default_name().ok_or_else(|| {
            CliError::user(format!(
                "Cannot derive a name from {}",
                source.repo_dir.display()
            ))
        })?,
    };
    let dir = allocate_name(&ctx.base, &base, NameStyle::today())?;
    log::info!(
        "worktree from {} (git: {}) into {dir}",
        source.repo_dir.display(),
        source.is_git
    );
    let plan = ShellPlan::worktree(&source.repo_dir, source.is_git, ctx.base.join(dir));
    Ok(Some(plan.render()))
}

/// Shell flavor for the wrapper function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Posix,
    Fish,
}

impl Shell {
    pub fn detect(shell_env: Option<&str>) -> Self {
        match shell_env {
            Some(shell) if shell.contains("fish") => Self::Fish,
            _ => Self::Posix,
        }
    }
}

pub fn cmd_init(ctx: &RunContext, dir: Option<&str>) -> CliResult<Option<String>> {
    let exe = std::env::current_exe()
        .and_then(dunce::canonicalize)
        .map_err(|e| CliError::system(format!("Unable to locate the tries binary: {e}")))?;
    let path = match dir {
        Some(dir) => Some(
            tries_core::paths::resolve_path(dir, &ctx.cwd)
                .ok_or_else(|| CliError::system("Unable to find home directory"))?,
        ),
        None => None,
    };
    let shell = Shell::detect(std::env::var("SHELL").ok().as_deref());
    Ok(Some(wrapper_script(shell, &exe, path.as_deref())))
}

/// The `try` shell function. Subcommands pass through; anything else is a `cd` query.
/// The UI goes to the terminal and the single output line is evaluated.
pub fn wrapper_script(shell: Shell, exe: &Path, path: Option<&Path>) -> String {
    let exe = shell_quote(&exe.to_string_lossy());
    let path_arg = path
        .map(|path| format!(" --path {}", shell_quote(&path.to_string_lossy())))
        .unwrap_or_default();
    match shell {
        Shell::Posix => format!(
            r#"try() {{
  case "$1" in
    clone|worktree|init|cd)
      cmd=$({exe}{path_arg} "$@" 2>/dev/tty)
      ;;
    *)
      cmd=$({exe}{path_arg} cd "$@" 2>/dev/tty)
      ;;
  esac
  rc=$?
  if [ $rc -eq 0 ] && [ -n "$cmd" ]; then
    eval "$cmd"
  else
    return $rc
  fi
}}"#
        ),
        Shell::Fish => format!(
            r#"function try
  switch $argv[1]
    case clone worktree init cd
      set -f cmd ({exe}{path_arg} $argv 2>/dev/tty | string collect)
    case '*'
      set -f cmd ({exe}{path_arg} cd $argv 2>/dev/tty | string collect)
  end
  set -l rc $status
  if test $rc -eq 0; and test -n "$cmd"
    eval $cmd
  else
    return $rc
  end
end"#
        ),
    }
}
