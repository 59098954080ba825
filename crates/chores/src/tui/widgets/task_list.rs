use chores_app::{Clock, StateStore};
use chores_core::FilterMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use time::macros::format_description;

use super::super::constants::{CHECKBOX_DONE, CHECKBOX_OPEN, MOVE_GRAB_MARKER, TASK_LIST_HIGHLIGHT_SYMBOL};
use super::super::palette::Palette;
use super::super::view::{Mode, Ui};
use super::util::truncate_with_ellipsis;

// checkbox + marker + highlight symbol + borders
const ROW_OVERHEAD: u16 = 10;

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let grabbed = match &self.mode {
            Mode::Moving { task } => Some(*task),
            _ => None,
        };

        let items: Vec<ListItem<'_>> = if self.app.has_visible_tasks() {
            let max_text = usize::from(area.width.saturating_sub(ROW_OVERHEAD));
            self.app
                .visible_tasks()
                .map(|task| {
                    let checkbox = if task.completed { CHECKBOX_DONE } else { CHECKBOX_OPEN };
                    let marker = if grabbed == Some(task.id) { MOVE_GRAB_MARKER } else { "" };

                    let text_style = if self.is_flashed(task.id) {
                        palette.flash
                    } else if task.completed {
                        palette.done
                    } else {
                        palette.text
                    };

                    let mut spans = vec![
                        Span::styled(marker, palette.accent),
                        Span::styled(format!("{checkbox} "), palette.meta),
                        Span::styled(
                            truncate_with_ellipsis(&task.text, max_text).into_owned(),
                            text_style,
                        ),
                    ];
                    if let Some(deadline) = task.deadline
                        && let Ok(formatted) =
                            deadline.format(format_description!("[year]-[month]-[day]"))
                    {
                        spans.push(Span::styled(format!("  @{formatted}"), palette.meta));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect()
        } else {
            let empty = if self.app.filter() == FilterMode::All {
                "no tasks yet, press a to add one"
            } else {
                "no tasks match this filter"
            };
            vec![ListItem::new(Line::styled(empty, palette.meta))]
        };

        let title = match &self.mode {
            Mode::Moving { .. } => "tasks (moving)",
            _ => "tasks",
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(palette.accent),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        if self.app.has_visible_tasks() {
            state.select(Some(self.app.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}
