use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Completion-state predicate selecting which tasks a view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task, in canonical store order.
    #[default]
    All,
    /// Tasks that are not completed.
    Active,
    /// Tasks that are completed.
    Completed,
}

impl FilterMode {
    /// Whether `task` belongs to this view.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// String representation used in configuration and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// The next mode in the All → Active → Completed cycle.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a filter mode string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter mode '{0}', expected all, active, or completed")]
pub struct ParseFilterError(String);

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn task(completed: bool) -> Task {
        let mut task = Task::new("x".into(), None, datetime!(2024-05-01 12:00 UTC));
        if completed {
            task.complete(datetime!(2024-05-01 13:00 UTC));
        }
        task
    }

    #[test]
    fn all_matches_everything() {
        assert!(FilterMode::All.matches(&task(false)));
        assert!(FilterMode::All.matches(&task(true)));
    }

    #[test]
    fn active_and_completed_partition() {
        let open = task(false);
        let done = task(true);
        assert!(FilterMode::Active.matches(&open));
        assert!(!FilterMode::Active.matches(&done));
        assert!(!FilterMode::Completed.matches(&open));
        assert!(FilterMode::Completed.matches(&done));
    }

    #[test]
    fn parse_accepts_known_modes() {
        assert_eq!("all".parse::<FilterMode>(), Ok(FilterMode::All));
        assert_eq!(" Active ".parse::<FilterMode>(), Ok(FilterMode::Active));
        assert_eq!("done".parse::<FilterMode>(), Ok(FilterMode::Completed));
        assert!("half-done".parse::<FilterMode>().is_err());
    }

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = FilterMode::All;
        mode = mode.cycled();
        assert_eq!(mode, FilterMode::Active);
        mode = mode.cycled();
        assert_eq!(mode, FilterMode::Completed);
        mode = mode.cycled();
        assert_eq!(mode, FilterMode::All);
    }
}
