//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Default time-to-live in milliseconds for the freshly-added-task flash.
pub const ADD_FLASH_TTL_MS: u64 = 1200;
/// Highlight symbol shown beside the selected list entry.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Marker shown beside a task grabbed in move mode.
pub const MOVE_GRAB_MARKER: &str = "⇅ ";
/// Checkbox glyph for completed tasks.
pub const CHECKBOX_DONE: &str = "[x]";
/// Checkbox glyph for active tasks.
pub const CHECKBOX_OPEN: &str = "[ ]";
/// Height of the input bar row.
pub const INPUT_BAR_HEIGHT: u16 = 3;
/// Height of the filter bar row.
pub const FILTER_BAR_HEIGHT: u16 = 3;
/// Height of the status row.
pub const STATUS_HEIGHT: u16 = 3;
/// Minimum height of the task list area.
pub const LIST_MIN_HEIGHT: u16 = 5;
