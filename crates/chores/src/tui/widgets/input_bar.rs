use chores_app::{Clock, StateStore};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Block, Borders, Paragraph},
};

use super::super::palette::Palette;
use super::super::view::{Mode, Ui};

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_input_bar(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let (title, text, cursor) = match &self.mode {
            Mode::Adding(input) => ("add task (Enter commits, Esc cancels)", input.text(), Some(input.cursor())),
            Mode::Editing { input, .. } => {
                ("edit task (Enter commits, Esc discards)", input.text(), Some(input.cursor()))
            }
            Mode::Browse | Mode::Moving { .. } => (
                "chores",
                "press a to add a task, optionally ending with @YYYY-MM-DD".to_owned(),
                None,
            ),
        };

        let style = if cursor.is_some() { palette.text } else { palette.meta };
        let paragraph = Paragraph::new(text).style(style).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(palette.accent),
        );
        f.render_widget(paragraph, area);

        // Place the terminal cursor inside the bar while an input is live.
        if let Some(cursor) = cursor {
            let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(offset)
                .min(area.right().saturating_sub(2));
            f.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
