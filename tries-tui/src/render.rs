use crate::{
    buffer::RenderBuffer,
    template::{TemplateContext, Templates},
    terminal::TerminalSize,
    theme::Theme,
};
use tries_core::{Result, Selector, search::match_range};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Search: ";
const COUNTER: &str = "{matches}/{total}";
const SELECTED_MARKER: &str = "▸ ";
const UNSELECTED_MARKER: &str = "  ";
const CREATE_HINT: &str = "+ Create new: ";
const DELETE_PROMPT_STYLE: &str = "{accent}";
const STATUS_STYLE: &str = "{selected}";

/// Styling inputs shared by every frame.
#[derive(Default)]
pub struct View {
    pub theme: Theme,
    pub templates: Templates,
}

/// One terminal row that refuses to grow past the terminal width.
struct Line<'b> {
    buf: &'b mut RenderBuffer,
    remaining: usize,
}

impl<'b> Line<'b> {
    fn new(buf: &'b mut RenderBuffer, width: u16) -> Self {
        Self {
            buf,
            remaining: usize::from(width),
        }
    }

    /// Escape sequences take no columns.
    fn style(&mut self, ansi: &str) {
        self.buf.print(ansi);
    }

    fn text(&mut self, text: &str) {
        let (visible, used) = truncate_to_width(text, self.remaining);
        self.buf.print(visible);
        self.remaining -= used;
    }

    fn fits(&self, text: &str) -> bool {
        text.width() <= self.remaining
    }

    fn finish(self, reset: &str) {
        self.buf.puts(reset);
    }
}

/// Longest prefix of `text` made of whole graphemes that fits in `max_width` columns.
fn truncate_to_width(text: &str, max_width: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let width = grapheme.width();
        if used + width > max_width {
            return (&text[..idx], used);
        }
        used += width;
    }
    (text, used)
}

/// First row of the window so that the cursor row is on screen.
fn window_start(cursor: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    cursor.saturating_sub(rows - 1)
}

/// Render the query line, an optional prompt or status row, then the entries, never more
/// than `height` lines in total.
pub fn render(
    selector: &Selector,
    size: TerminalSize,
    view: &View,
    buf: &mut RenderBuffer,
) -> Result<()> {
    let search = selector.search();
    let ctx = TemplateContext {
        theme: &view.theme,
        query: &search.query,
        matches: search.filtered.len(),
        total: selector.candidates().len(),
    };
    let expand = |template: &str| view.templates.expand(template, &ctx);
    let reset = expand("{reset}")?;

    let mut line = Line::new(buf, size.width);
    line.style(&expand("{accent}")?);
    line.text(PROMPT);
    line.text(&search.query);
    line.style(&reset);
    let counter = format!("  {}", expand(COUNTER)?);
    if line.fits(&counter) {
        line.style(&expand("{muted}")?);
        line.text(&counter);
    }
    line.finish(&reset);

    let mut rows = usize::from(size.height).saturating_sub(1);
    if rows == 0 {
        return Ok(());
    }

    let notice = match (selector.pending_delete(), selector.status()) {
        (Some(candidate), _) => Some((
            DELETE_PROMPT_STYLE,
            format!("Delete {}? (y/N)", candidate.name),
        )),
        (None, Some(status)) => Some((STATUS_STYLE, status.to_string())),
        (None, None) => None,
    };
    if let Some((style, message)) = notice {
        let mut line = Line::new(buf, size.width);
        line.style(&expand(style)?);
        line.text(&message);
        line.finish(&reset);
        rows -= 1;
        if rows == 0 {
            return Ok(());
        }
    }

    if search.filtered.is_empty() {
        if !search.query.trim().is_empty() {
            let mut line = Line::new(buf, size.width);
            line.style(&expand("{muted}")?);
            line.text(CREATE_HINT);
            line.style(&reset);
            line.text(&search.query);
            line.finish(&reset);
        }
        return Ok(());
    }

    let selected_style = expand("{selected}")?;
    let match_style = expand("{match}")?;
    let start = window_start(search.cursor, rows);
    for (row, &idx) in search.filtered.iter().enumerate().skip(start).take(rows) {
        let Some(candidate) = selector.candidates().get(idx) else {
            continue;
        };
        let is_selected = row == search.cursor;
        let row_style = if is_selected { selected_style.as_str() } else { "" };

        let mut line = Line::new(buf, size.width);
        line.style(row_style);
        line.text(if is_selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        });

        let name = candidate.name.as_str();
        match match_range(name, &search.query) {
            Some(range) => {
                line.text(&name[..range.start]);
                line.style(&match_style);
                line.text(&name[range.clone()]);
                line.style(&reset);
                line.style(row_style);
                line.text(&name[range.end..]);
            }
            None => line.text(name),
        }
        line.finish(&reset);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tries_core::{Action, Candidate};

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .map(|name| Candidate {
                name: (*name).to_string(),
                path: PathBuf::from("/tries").join(name),
            })
            .collect()
    }

    /// Drop CSI escape sequences so assertions see only the visible text.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn frame(selector: &Selector, width: u16, height: u16) -> Vec<String> {
        let mut buf = RenderBuffer::new();
        render(selector, TerminalSize { width, height }, &View::default(), &mut buf).unwrap();
        buf.lines().iter().map(|line| strip_ansi(line)).collect()
    }

    #[test]
    fn test_query_line_and_counter() {
        let selector = Selector::new(candidates(&["pool", "pond", "tree"]), "poo");
        let lines = frame(&selector, 80, 24);
        assert_eq!(lines[0], "Search: poo  1/3");
        assert_eq!(lines[1], "▸ pool");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_list_is_limited_to_height_minus_one() {
        let selector = Selector::new(candidates(&["a", "b", "c", "d", "e"]), "");
        let lines = frame(&selector, 80, 3);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "▸ a");
        assert_eq!(lines[2], "  b");
    }

    #[test]
    fn test_window_follows_cursor() {
        let mut selector = Selector::new(candidates(&["a", "b", "c", "d", "e"]), "");
        for _ in 0..4 {
            selector.apply(Action::MoveSelection(1)).unwrap();
        }
        let lines = frame(&selector, 80, 3);
        assert_eq!(lines[1], "  d");
        assert_eq!(lines[2], "▸ e");
    }

    #[test]
    fn test_lines_are_truncated_to_width() {
        let selector = Selector::new(candidates(&["a-very-long-directory-name"]), "");
        let lines = frame(&selector, 10, 24);
        assert_eq!(lines[0], "Search: ");
        assert_eq!(lines[1], "▸ a-very-l");
        assert!(lines.iter().all(|line| line.width() <= 10));
    }

    #[test]
    fn test_wide_graphemes_are_not_split() {
        let selector = Selector::new(candidates(&["日本語"]), "");
        let lines = frame(&selector, 7, 24);
        assert_eq!(lines[1], "▸ 日本");
    }

    #[test]
    fn test_create_hint_when_nothing_matches() {
        let selector = Selector::new(candidates(&["pool"]), "zebra");
        let lines = frame(&selector, 80, 24);
        assert_eq!(lines[1], "+ Create new: zebra");
    }

    #[test]
    fn test_empty_list_without_query_shows_only_prompt() {
        let selector = Selector::new(Vec::new(), "");
        let lines = frame(&selector, 80, 24);
        assert_eq!(lines, ["Search:   0/0"]);
    }

    #[test]
    fn test_prompt_and_query_are_contiguous() {
        let selector = Selector::new(candidates(&["pool"]), "pool");
        let mut buf = RenderBuffer::new();
        render(&selector, TerminalSize::FALLBACK, &View::default(), &mut buf).unwrap();
        assert!(buf.lines()[0].contains("Search: pool"));
    }

    #[test]
    fn test_names_with_braces_render_literally() {
        let selector = Selector::new(candidates(&["{bogus}"]), "");
        let lines = frame(&selector, 80, 24);
        assert_eq!(lines[1], "▸ {bogus}");
    }

    #[test]
    fn test_match_is_wrapped_in_style() {
        let selector = Selector::new(candidates(&["my-pool"]), "pool");
        let mut buf = RenderBuffer::new();
        render(&selector, TerminalSize::FALLBACK, &View::default(), &mut buf).unwrap();
        let raw = &buf.lines()[1];
        let pool_at = raw.find("pool").unwrap();
        assert!(raw[..pool_at].ends_with('m'), "match should follow an escape: {raw:?}");
    }

    #[test]
    fn test_delete_prompt_takes_a_row() {
        let mut selector = Selector::new(candidates(&["a", "b", "c"]), "");
        selector.apply(Action::Delete).unwrap();
        let lines = frame(&selector, 80, 3);
        assert_eq!(lines, ["Search:   3/3", "Delete a? (y/N)", "▸ a"]);
    }

    #[test]
    fn test_status_row_shown_after_delete() {
        let mut selector = Selector::new(candidates(&["a", "b"]), "");
        let deleted = selector.candidates()[0].clone();
        selector.finish_delete(&deleted, candidates(&["b"]));
        let lines = frame(&selector, 80, 24);
        assert_eq!(lines[1], "Deleted: a");
        assert_eq!(lines[2], "▸ b");
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(0, 5), 0);
        assert_eq!(window_start(4, 5), 0);
        assert_eq!(window_start(5, 5), 1);
        assert_eq!(window_start(3, 0), 0);
    }
}
