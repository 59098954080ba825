use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Light/dark UI preference, persisted independently of task data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark-background palette.
    Dark,
    /// Light-background palette.
    Light,
}

impl Theme {
    /// The literal stored in the theme slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Resolve the startup theme: a stored preference wins; otherwise the
    /// ambient source is consulted exactly once.
    pub fn resolve(stored: Option<Self>, ambient: impl FnOnce() -> Self) -> Self {
        stored.unwrap_or_else(ambient)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme slot holds an unknown literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected dark or light")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_ambient() {
        let theme = Theme::resolve(Some(Theme::Light), || panic!("ambient must not be read"));
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn ambient_fills_in_when_nothing_is_stored() {
        assert_eq!(Theme::resolve(None, || Theme::Dark), Theme::Dark);
    }

    #[test]
    fn slot_literal_roundtrip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
