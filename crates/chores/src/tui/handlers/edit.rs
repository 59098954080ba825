use anyhow::Result;
use chores_app::{Clock, StateStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::editor::{LineInput, parse_add_input};
use super::super::view::{Mode, Ui};

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn begin_edit(&mut self) {
        match self.app.selected_task() {
            Some(task) => {
                self.mode = Mode::Editing {
                    task: task.id,
                    input: LineInput::seeded(&task.text),
                };
            }
            None => self.error("no task selected"),
        }
    }

    pub(in crate::tui) fn handle_input_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Enter => self.commit_input()?,
            KeyCode::Backspace => self.with_input(LineInput::backspace),
            KeyCode::Delete => self.with_input(LineInput::delete),
            KeyCode::Left => self.with_input(LineInput::left),
            KeyCode::Right => self.with_input(LineInput::right),
            KeyCode::Home => self.with_input(LineInput::home),
            KeyCode::End => self.with_input(LineInput::end),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.with_input(|input| input.insert(ch));
            }
            _ => {}
        }
        Ok(())
    }

    /// An edit session in progress commits when the terminal loses focus,
    /// mirroring commit-on-blur. A half-typed add is discarded instead.
    pub(in crate::tui) fn handle_focus_lost(&mut self) -> Result<()> {
        match self.mode {
            Mode::Editing { .. } => self.commit_input(),
            Mode::Adding(_) => {
                self.mode = Mode::Browse;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn cancel_input(&mut self) {
        if matches!(self.mode, Mode::Editing { .. }) {
            self.info("edit cancelled");
        }
        self.mode = Mode::Browse;
    }

    fn commit_input(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Adding(input) => {
                let (text, deadline) = parse_add_input(&input.text());
                // Blank text is a silent no-op.
                if let Some(id) = self.app.add(&text, deadline)? {
                    self.flash_task(id);
                    self.info("added task");
                }
            }
            Mode::Editing { task, input } => {
                if self.app.edit(task, &input.text())? {
                    self.info("updated task");
                }
            }
            other => self.mode = other,
        }
        Ok(())
    }

    fn with_input(&mut self, f: impl FnOnce(&mut LineInput)) {
        match &mut self.mode {
            Mode::Adding(input) | Mode::Editing { input, .. } => f(input),
            _ => {}
        }
    }
}
