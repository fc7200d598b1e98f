use crate::action::Action;

/// Translate a comma-separated key script (`UP`, `CTRL-N`, `TYPE=<text>`, single characters)
/// into actions. Unrecognised tokens are skipped.
pub fn parse_key_script(script: &str) -> Vec<Action> {
    let mut actions = Vec::new();
    for token in script.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(action) = named_key(&token.to_ascii_uppercase()) {
            actions.push(action);
        } else if let Some(text) = typed_text(token) {
            actions.extend(text.chars().map(Action::SearchPush));
        } else if let Some(c) = single_char(token) {
            actions.push(Action::SearchPush(c));
        } else {
            log::warn!("ignoring unknown key token {token:?}");
        }
    }
    actions
}

fn named_key(token: &str) -> Option<Action> {
    let action = match token {
        "UP" | "CTRL-P" | "CTRLP" | "CTRL-K" | "CTRLK" => Action::MoveSelection(-1),
        "DOWN" | "CTRL-N" | "CTRLN" | "CTRL-J" | "CTRLJ" => Action::MoveSelection(1),
        "ENTER" => Action::Confirm,
        "ESC" | "CTRL-C" | "CTRLC" => Action::Cancel,
        "BACKSPACE" => Action::SearchPop,
        "CTRL-D" | "CTRLD" => Action::Delete,
        _ => return None,
    };
    Some(action)
}

/// Answer every delete prompt in a script: `y` when `confirmed`, a declining key otherwise.
pub fn with_delete_answer(actions: Vec<Action>, confirmed: bool) -> Vec<Action> {
    let answer = Action::SearchPush(if confirmed { 'y' } else { 'n' });
    let mut answered = Vec::with_capacity(actions.len());
    for action in actions {
        answered.push(action);
        if action == Action::Delete {
            answered.push(answer);
        }
    }
    answered
}

fn typed_text(token: &str) -> Option<&str> {
    let (prefix, text) = token.split_at_checked(5)?;
    prefix.eq_ignore_ascii_case("TYPE=").then_some(text)
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
