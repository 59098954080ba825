use anyhow::Result;
use chores_app::{Clock, StateStore};
use chores_core::FilterMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::super::editor::LineInput;
use super::super::view::{Mode, Ui};

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match &self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Adding(_) | Mode::Editing { .. } => self.handle_input_key(key),
            Mode::Moving { .. } => self.handle_move_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.app.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.app.select_prev(),
            KeyCode::Char('a') | KeyCode::Char('i') => self.mode = Mode::Adding(LineInput::new()),
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('x') | KeyCode::Char(' ') => self.toggle_selected()?,
            KeyCode::Char('d') => self.delete_selected()?,
            KeyCode::Char('m') => self.begin_move(),
            KeyCode::Char('t') => self.toggle_theme()?,
            KeyCode::Tab => self.cycle_filter(),
            KeyCode::Char('1') => self.set_filter(FilterMode::All),
            KeyCode::Char('2') => self.set_filter(FilterMode::Active),
            KeyCode::Char('3') => self.set_filter(FilterMode::Completed),
            _ => {}
        }
        Ok(())
    }

    fn toggle_selected(&mut self) -> Result<()> {
        if !self.app.toggle_selected()? {
            self.error("no task selected");
        }
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        if self.app.remove_selected()? {
            self.info("deleted task");
        } else {
            self.error("no task selected");
        }
        Ok(())
    }
}
