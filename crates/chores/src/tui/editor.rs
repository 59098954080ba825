use chores_core::parse_deadline;
use time::Date;

/// Single-line input buffer with a character cursor, used by the add bar
/// and by inline edit sessions.
#[derive(Debug, Clone, Default)]
pub(super) struct LineInput {
    chars: Vec<char>,
    cursor: usize,
}

impl LineInput {
    pub(super) const fn new() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    /// Seed the buffer, cursor at the end.
    pub(super) fn seeded(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub(super) fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub(super) fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub(super) fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub(super) fn home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub(super) fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters (cell width is approximated as one).
    pub(super) const fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Split committed add-bar text into task text and an optional deadline.
///
/// A trailing ` @YYYY-MM-DD` names the deadline; anything that fails to
/// parse as a date stays part of the task text.
pub(super) fn parse_add_input(raw: &str) -> (String, Option<Date>) {
    let trimmed = raw.trim();
    if let Some((head, tail)) = trimmed.rsplit_once(" @")
        && let Ok(deadline) = parse_deadline(tail)
    {
        return (head.trim().to_owned(), Some(deadline));
    }
    (trimmed.to_owned(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn insert_and_backspace_track_the_cursor() {
        let mut input = LineInput::new();
        for ch in "milk".chars() {
            input.insert(ch);
        }
        input.left();
        input.insert('!');
        assert_eq!(input.text(), "mil!k");

        input.backspace();
        assert_eq!(input.text(), "milk");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn seeded_starts_with_cursor_at_the_end() {
        let input = LineInput::seeded("edit me");
        assert_eq!(input.cursor(), 7);
        assert_eq!(input.text(), "edit me");
    }

    #[test]
    fn delete_removes_under_the_cursor() {
        let mut input = LineInput::seeded("abc");
        input.home();
        input.delete();
        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn add_input_with_deadline_suffix() {
        let (text, deadline) = parse_add_input("Buy milk @2024-06-15");
        assert_eq!(text, "Buy milk");
        assert_eq!(deadline, Some(date!(2024 - 06 - 15)));
    }

    #[test]
    fn add_input_without_suffix_keeps_everything_as_text() {
        let (text, deadline) = parse_add_input("  email @alice about standup  ");
        assert_eq!(text, "email @alice about standup");
        assert!(deadline.is_none());
    }
}
