/// Every key press is turned into an Action before it reaches the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Search
    SearchPush(char),
    SearchPop,

    // Movement
    MoveSelection(i32),

    // Entries
    Delete,

    // Terminal
    Confirm,
    Cancel,
}
