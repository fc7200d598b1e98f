pub mod action;
pub mod candidates;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod keyboard;
pub mod naming;
pub mod outcome;
pub mod paths;
pub mod remote;
pub mod search;
pub mod state;

// Re-export commonly used types at crate root
pub use action::Action;
pub use candidates::{Candidate, list_candidates, remove_candidate};
pub use command::ShellPlan;
pub use config::Config;
pub use error::{Error, Result};
pub use naming::{NameStyle, allocate_name};
pub use outcome::Outcome;
pub use remote::{ParsedRemote, parse_remote};
pub use state::{Phase, SearchState, Selector, Transition};
