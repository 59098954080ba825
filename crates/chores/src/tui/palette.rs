use chores_app::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Styles derived from the active theme. Only the two palettes here are in
/// scope; everything else renders with terminal defaults.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    /// Base style for the whole frame.
    pub base: Style,
    /// Task text.
    pub text: Style,
    /// Completed task text.
    pub done: Style,
    /// Secondary metadata (deadlines, counts).
    pub meta: Style,
    /// Accent used for the active filter and borders.
    pub accent: Style,
    /// Flash applied to a freshly added task.
    pub flash: Style,
}

impl Palette {
    pub(super) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Style::default().bg(Color::Black).fg(Color::Gray),
                text: Style::default().fg(Color::White),
                done: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
                meta: Style::default().fg(Color::DarkGray),
                accent: Style::default().fg(Color::Cyan),
                flash: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            },
            Theme::Light => Self {
                base: Style::default().bg(Color::White).fg(Color::DarkGray),
                text: Style::default().fg(Color::Black),
                done: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::CROSSED_OUT),
                meta: Style::default().fg(Color::Gray),
                accent: Style::default().fg(Color::Blue),
                flash: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            },
        }
    }
}
