//! Rendering helpers for the TUI, one widget per file.

pub(super) mod filter_bar;
pub(super) mod input_bar;
pub(super) mod status;
pub(super) mod task_list;
pub(super) mod util;
