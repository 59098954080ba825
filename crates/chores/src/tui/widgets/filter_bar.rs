use chores_app::{Clock, StateStore};
use chores_core::FilterMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::palette::Palette;
use super::super::view::Ui;

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_filter_bar(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let (all, active, completed) = self.app.counts();
        let entries = [
            (FilterMode::All, all),
            (FilterMode::Active, active),
            (FilterMode::Completed, completed),
        ];

        let mut spans = Vec::with_capacity(entries.len() * 2);
        for (index, (mode, count)) in entries.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  |  ", palette.meta));
            }
            let label = format!("{} {} ({count})", index + 1, mode);
            let style = if *mode == self.app.filter() {
                palette.accent.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                palette.meta
            };
            spans.push(Span::styled(label, style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("filter (Tab cycles)")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        );
        f.render_widget(paragraph, area);
    }
}
