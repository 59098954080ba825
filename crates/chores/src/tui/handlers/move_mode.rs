use anyhow::Result;
use chores_app::{Clock, StateStore};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::view::{Mode, Ui};

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn begin_move(&mut self) {
        match self.app.selected_task_id() {
            Some(task) => self.mode = Mode::Moving { task },
            None => self.error("no task selected"),
        }
    }

    pub(in crate::tui) fn handle_move_key(&mut self, key: KeyEvent) -> Result<()> {
        let task = match &self.mode {
            Mode::Moving { task } => *task,
            _ => return Ok(()),
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.app.move_within_view(task, 1)?;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.app.move_within_view(task, -1)?;
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
        Ok(())
    }
}
