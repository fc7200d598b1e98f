use crate::{
    action::Action,
    candidates::Candidate,
    error::{Error, Result},
    outcome::Outcome,
    search,
};
use unicode_segmentation::UnicodeSegmentation;

/// Query text, highlighted row and the rows that currently match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Index into `filtered`; always 0 when `filtered` is empty
    pub cursor: usize,
    /// Candidate indices matching `query`, in candidate order
    pub filtered: Vec<usize>,
}

impl SearchState {
    pub fn new(candidates: &[Candidate], query: &str) -> Self {
        let mut state = Self {
            query: query.to_string(),
            ..Self::default()
        };
        state.refilter(candidates);
        state
    }

    /// Recompute matches for the current query and put the cursor back on the first row.
    pub fn refilter(&mut self, candidates: &[Candidate]) {
        self.filtered = search::filter(candidates, &self.query);
        self.cursor = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last grapheme cluster of the query (UTF-8 safe)
    pub fn pop_char(&mut self) -> bool {
        match self.query.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                self.query.truncate(start);
                true
            }
            None => false,
        }
    }

    /// Move the cursor by delta, clamping to bounds
    pub fn move_selection(&mut self, delta: i32) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }
        let before = self.cursor;
        if delta > 0 {
            self.cursor = self
                .cursor
                .saturating_add(delta.unsigned_abs() as usize)
                .min(len - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(delta.unsigned_abs() as usize);
        }
        before != self.cursor
    }

    /// Candidate index under the cursor
    pub fn selected(&self) -> Option<usize> {
        self.filtered.get(self.cursor).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Confirmed,
    Cancelled,
}

/// Result of feeding one action to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Query or cursor changed; draw again before reading the next key
    Redraw,
    /// Nothing visible changed
    Unchanged,
    /// Deletion of this candidate was confirmed; the caller removes it and reloads
    DeleteRequested(Candidate),
    /// The session ended
    Finished(Outcome),
}

/// Keystroke-driven selection over a fixed snapshot of candidates.
#[derive(Debug, Clone)]
pub struct Selector {
    candidates: Vec<Candidate>,
    search: SearchState,
    phase: Phase,
    /// Candidate index awaiting a yes/no answer
    pending_delete: Option<usize>,
    /// One-shot message shown until the next key
    status: Option<String>,
}

impl Selector {
    pub fn new(candidates: Vec<Candidate>, initial_query: &str) -> Self {
        let search = SearchState::new(&candidates, initial_query);
        Self {
            candidates,
            search,
            phase: Phase::Active,
            pending_delete: None,
            status: None,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.search
            .selected()
            .and_then(|idx| self.candidates.get(idx))
    }

    /// Candidate the delete prompt is asking about
    pub fn pending_delete(&self) -> Option<&Candidate> {
        self.pending_delete.and_then(|idx| self.candidates.get(idx))
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Swap in a fresh snapshot after `deleted` was removed from disk. The query is kept and
    /// the cursor stays on the same row where possible.
    pub fn finish_delete(&mut self, deleted: &Candidate, candidates: Vec<Candidate>) {
        let cursor = self.search.cursor;
        self.candidates = candidates;
        self.search.refilter(&self.candidates);
        self.search.cursor = cursor.min(self.search.filtered.len().saturating_sub(1));
        self.status = Some(format!("Deleted: {}", deleted.name));
    }

    /// Matching candidates in display order
    pub fn matches(&self) -> impl Iterator<Item = &Candidate> {
        self.search
            .filtered
            .iter()
            .filter_map(|&idx| self.candidates.get(idx))
    }

    pub fn apply(&mut self, action: Action) -> Result<Transition> {
        if self.phase != Phase::Active {
            return Ok(Transition::Unchanged);
        }

        let had_status = self.status.take().is_some();
        if let Some(idx) = self.pending_delete.take() {
            return Ok(self.answer_delete(idx, action));
        }

        let transition = match action {
            Action::SearchPush(c) => {
                self.search.push_char(c);
                self.search.refilter(&self.candidates);
                Transition::Redraw
            }
            Action::SearchPop => {
                if self.search.pop_char() {
                    self.search.refilter(&self.candidates);
                    Transition::Redraw
                } else {
                    Transition::Unchanged
                }
            }
            Action::MoveSelection(delta) => {
                if self.search.move_selection(delta) {
                    Transition::Redraw
                } else {
                    Transition::Unchanged
                }
            }
            Action::Delete => match self.search.selected() {
                Some(idx) => {
                    self.pending_delete = Some(idx);
                    Transition::Redraw
                }
                None => Transition::Unchanged,
            },
            Action::Confirm => Transition::Finished(self.confirm()?),
            Action::Cancel => {
                self.phase = Phase::Cancelled;
                Transition::Finished(Outcome::Cancelled)
            }
        };
        // The status line disappears on the next key, which needs a frame of its own
        if had_status && transition == Transition::Unchanged {
            return Ok(Transition::Redraw);
        }
        Ok(transition)
    }

    /// Only `y` confirms; every other key, Esc included, abandons the delete.
    fn answer_delete(&mut self, idx: usize, action: Action) -> Transition {
        match (action, self.candidates.get(idx)) {
            (Action::SearchPush('y' | 'Y'), Some(candidate)) => {
                log::debug!("delete confirmed for {}", candidate.name);
                Transition::DeleteRequested(candidate.clone())
            }
            _ => {
                self.status = Some("Delete cancelled".to_string());
                Transition::Redraw
            }
        }
    }

    fn confirm(&mut self) -> Result<Outcome> {
        let outcome = if let Some(candidate) = self.selected() {
            Outcome::Selected(candidate.clone())
        } else if self.search.query.trim().is_empty() {
            return Err(Error::EmptyQueryNoMatch);
        } else {
            Outcome::CreateNew(self.search.query.clone())
        };
        log::debug!("selection confirmed: {outcome:?}");
        self.phase = Phase::Confirmed;
        Ok(outcome)
    }
}
