use crate::{
    buffer::RenderBuffer,
    keymap,
    render::{View, render},
    terminal::{self, RawModeGuard, TerminalSize},
};
use crossterm::event::{self, Event};
use std::{
    collections::VecDeque,
    io::{self, Write},
    path::Path,
};
use tries_core::{
    Action, Candidate, Outcome, Selector, Transition, list_candidates, remove_candidate,
};

/// Where the session's key presses come from
pub trait KeySource {
    /// Block until the next action is available.
    fn next_action(&mut self) -> anyhow::Result<Action>;
}

/// Reads keys from the terminal. Keys with no binding are skipped.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_action(&mut self) -> anyhow::Result<Action> {
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(action) = keymap::resolve_action(key)
            {
                return Ok(action);
            }
        }
    }
}

/// Replays a fixed list of actions, then cancels.
pub struct ScriptedKeys {
    actions: VecDeque<Action>,
}

impl ScriptedKeys {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_action(&mut self) -> anyhow::Result<Action> {
        Ok(self.actions.pop_front().unwrap_or(Action::Cancel))
    }
}

/// Output side of a session: renders frames and writes them to `out`.
pub struct Screen<W: Write> {
    out: W,
    view: View,
    buf: RenderBuffer,
    clear_screen: bool,
    size: Option<TerminalSize>,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, view: View) -> Self {
        Self {
            out,
            view,
            buf: RenderBuffer::new(),
            clear_screen: true,
            size: None,
        }
    }

    /// Skip the clear sequence between frames (scripted runs print frames one after another)
    #[must_use]
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Pin the frame size instead of asking the terminal
    #[must_use]
    pub fn with_size(mut self, size: TerminalSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn draw(&mut self, selector: &Selector) -> anyhow::Result<()> {
        let size = self.size.unwrap_or_else(terminal::size);
        if self.clear_screen {
            self.buf.clear(&mut self.out)?;
        } else {
            self.buf.reset();
        }
        render(selector, size, &self.view, &mut self.buf)?;
        if !self.clear_screen {
            self.buf.puts("");
        }
        self.buf.flush(&mut self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Drive the selector until it reaches an outcome, redrawing after every change.
/// Deletes are carried out under `base` and the list is re-read afterwards.
pub fn run<K: KeySource, W: Write>(
    selector: &mut Selector,
    keys: &mut K,
    screen: &mut Screen<W>,
    base: &Path,
) -> anyhow::Result<Outcome> {
    screen.draw(selector)?;
    loop {
        let action = keys.next_action()?;
        match selector.apply(action)? {
            Transition::Redraw => screen.draw(selector)?,
            Transition::Unchanged => {}
            Transition::DeleteRequested(candidate) => {
                delete(selector, &candidate, base)?;
                screen.draw(selector)?;
            }
            Transition::Finished(outcome) => {
                log::info!("session finished: {outcome:?}");
                return Ok(outcome);
            }
        }
    }
}

fn delete(selector: &mut Selector, candidate: &Candidate, base: &Path) -> anyhow::Result<()> {
    match remove_candidate(candidate) {
        Ok(()) => selector.finish_delete(candidate, list_candidates(base)?),
        Err(e) => {
            log::warn!("failed to delete {}: {e}", candidate.path.display());
            selector.set_status(format!("Delete failed: {e}"));
        }
    }
    Ok(())
}

/// Run against the real terminal, rendering to stderr in raw mode.
pub fn run_interactive(
    selector: &mut Selector,
    view: View,
    base: &Path,
) -> anyhow::Result<Outcome> {
    let _guard = RawModeGuard::enter(io::stderr())?;
    let mut screen = Screen::new(io::stderr(), view);
    run(selector, &mut TerminalKeys, &mut screen, base)
}
