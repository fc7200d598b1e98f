use crate::candidates::Candidate;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An existing directory was picked
    Selected(Candidate),
    /// Nothing matched, so the typed query names a new directory
    CreateNew(String),
    /// The user backed out; nothing is printed
    Cancelled,
}
