use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chores_app::{Clock, StateStore, Theme};
use chores_core::TaskId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Block,
};

use super::app::App;
use super::constants::{
    FILTER_BAR_HEIGHT, INPUT_BAR_HEIGHT, LIST_MIN_HEIGHT, STATUS_HEIGHT, UI_MESSAGE_TTL_SECS,
};
use super::editor::LineInput;
use super::palette::Palette;

/// Input focus of the UI.
pub(super) enum Mode {
    /// Browsing the task list.
    Browse,
    /// Typing into the add bar.
    Adding(LineInput),
    /// Inline edit session for one task; Escape discards, Enter or focus
    /// loss commits.
    Editing {
        /// Task being edited.
        task: TaskId,
        /// In-progress replacement text.
        input: LineInput,
    },
    /// Move mode: the grabbed task follows j/k within the visible sequence.
    Moving {
        /// Grabbed task.
        task: TaskId,
    },
}

pub(super) struct Ui<S, C> {
    pub(super) app: App<S, C>,
    pub(super) theme: Theme,
    pub(super) mode: Mode,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    flash: Option<Flash>,
    flash_ttl: Duration,
}

/// Cosmetic highlight on a freshly added task.
struct Flash {
    task: TaskId,
    created_at: Instant,
}

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(super) const fn new(app: App<S, C>, theme: Theme, flash_ttl: Duration) -> Self {
        Self {
            app,
            theme,
            mode: Mode::Browse,
            message: None,
            should_quit: false,
            flash: None,
            flash_ttl,
        }
    }

    pub(super) fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    /// Expire transient state. Called at the tick rate.
    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
        if let Some(flash) = &self.flash
            && flash.created_at.elapsed() >= self.flash_ttl
        {
            self.flash = None;
        }
    }

    pub(super) fn flash_task(&mut self, task: TaskId) {
        self.flash = Some(Flash {
            task,
            created_at: Instant::now(),
        });
    }

    pub(super) fn is_flashed(&self, task: TaskId) -> bool {
        self.flash.as_ref().is_some_and(|flash| flash.task == task)
    }

    /// Flip the theme and persist the preference immediately.
    pub(super) fn toggle_theme(&mut self) -> Result<()> {
        let next = self.theme.toggled();
        self.app
            .service()
            .store()
            .save_theme(next)
            .context("failed to persist theme preference")?;
        self.theme = next;
        self.info(format!("theme: {next}"));
        Ok(())
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let palette = self.palette();
        f.render_widget(Block::default().style(palette.base), f.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_BAR_HEIGHT),
                Constraint::Min(LIST_MIN_HEIGHT),
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(f.area());

        self.draw_input_bar(f, chunks[0], &palette);
        self.draw_task_list(f, chunks[1], &palette);
        self.draw_filter_bar(f, chunks[2], &palette);
        self.draw_status(f, chunks[3], &palette);
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expiry_is_ttl_driven() {
        let msg = Message::info("saved");
        assert!(!msg.is_expired(Duration::from_secs(60)));
        assert!(msg.is_expired(Duration::ZERO));
    }
}
