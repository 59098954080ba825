use crate::id::TaskId;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// A single todo item.
///
/// `completed` and `completed_at` move together: `completed_at` is present
/// if and only if the task is completed, and an un-completed task omits the
/// field from its serialized form entirely rather than writing `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, assigned at creation.
    pub id: TaskId,
    /// Task text; non-empty (post-trim) at creation, mutable via edit.
    pub text: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp in UTC. Immutable.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Completion timestamp; `Some` exactly while `completed` holds.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<OffsetDateTime>,
    /// Optional deadline date. Immutable once set; there is no edit surface.
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,
}

impl Task {
    /// Create a fresh, un-completed task. The caller supplies pre-trimmed text.
    #[must_use]
    pub fn new(text: String, deadline: Option<Date>, created_at: OffsetDateTime) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            created_at,
            completed_at: None,
            deadline,
        }
    }

    /// Whether the task still needs doing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }

    /// Flip completion, keeping the `completed`/`completed_at` pair in sync.
    pub fn toggle(&mut self, now: OffsetDateTime) {
        if self.completed {
            self.reopen();
        } else {
            self.complete(now);
        }
    }

    /// Mark the task done, stamping `completed_at`.
    pub fn complete(&mut self, now: OffsetDateTime) {
        self.completed = true;
        self.completed_at = Some(now);
    }

    /// Revert the task to active, clearing `completed_at`.
    pub fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}

/// ISO `YYYY-MM-DD` (de)serialization for deadline dates.
mod iso_date {
    use super::{Date, format_description};

    const FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day]");

    /// Serde helpers for `Option<Date>`.
    pub mod option {
        use super::{Date, FORMAT};
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serialize an optional date as an ISO string.
        pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(date) => {
                    let text = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
                    serializer.serialize_some(&text)
                }
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize an optional ISO date string.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value: Option<String> = Option::deserialize(deserializer)?;
            value
                .map(|text| Date::parse(&text, FORMAT).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

/// Parse a deadline in `YYYY-MM-DD` form.
///
/// # Errors
/// Returns the underlying parse error when the input is not an ISO date.
pub fn parse_deadline(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
}
