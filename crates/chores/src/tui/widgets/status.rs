use std::borrow::Cow;

use chores_app::{Clock, StateStore};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::palette::Palette;
use super::super::view::{Message, Mode, Ui};

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let paragraph = Paragraph::new(self.status_text())
            .style(self.status_style(palette))
            .block(
                Block::default()
                    .title("status")
                    .borders(Borders::ALL)
                    .border_style(palette.accent),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn status_text(&self) -> Cow<'_, str> {
        if let Some(msg) = &self.message {
            return Cow::Borrowed(msg.text.as_str());
        }
        Cow::Borrowed(match &self.mode {
            Mode::Browse => {
                "j/k move  x toggle  a add  e edit  d delete  m grab  t theme  1/2/3 filter  q quit"
            }
            Mode::Adding(_) | Mode::Editing { .. } => "Enter commits, Esc cancels",
            Mode::Moving { .. } => "j/k move the grabbed task, Enter or Space drops it",
        })
    }

    fn status_style(&self, palette: &Palette) -> Style {
        self.message
            .as_ref()
            .map_or(palette.meta, Message::style)
    }
}
