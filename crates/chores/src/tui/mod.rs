//! Interactive terminal UI.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chores_app::{StateStore, SystemClock, TaskService, Theme};
use chores_store_fs::FsStore;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use crate::config::Config;

mod app;
pub mod constants;
mod editor;
mod handlers;
mod palette;
mod view;
mod widgets;

use self::app::App;
use self::constants::TUI_TICK_RATE_MS;
use self::view::Ui;

/// Launch the interactive TUI.
pub fn run(store: &FsStore, config: &Config) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    // Focus change reporting is off by default; without it the terminal
    // never delivers the FocusLost events that commit a pending edit.
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, store, config)
    });

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    store: &FsStore,
    config: &Config,
) -> Result<()> {
    let theme = Theme::resolve(store.load_theme(), ambient_theme);
    let service = TaskService::new(store, SystemClock);
    let app = App::new(service, config.default_filter);
    let mut ui = Ui::new(app, theme, Duration::from_millis(config.highlight_ttl_ms));

    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TUI_TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)? {
            // Failures here are save errors; the mutation already applied
            // in memory, so surface them as a transient message.
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    if let Err(err) = ui.handle_key(key) {
                        ui.error(format!("{err:#}"));
                    }
                }
                CrosstermEvent::FocusLost => {
                    if let Err(err) = ui.handle_focus_lost() {
                        ui.error(format!("{err:#}"));
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Ambient theme heuristic, consulted once when no preference is stored.
/// `COLORFGBG` is `fg;bg`; high background codes are light palettes.
fn ambient_theme() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| {
            value
                .rsplit(';')
                .next()
                .and_then(|bg| bg.trim().parse::<u8>().ok())
        })
        .map_or(Theme::Dark, |bg| {
            if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark }
        })
}

#[cfg(test)]
mod tests;
