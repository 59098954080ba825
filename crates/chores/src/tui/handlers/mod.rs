//! Keyboard handling, split by input mode.

pub(super) mod edit;
pub(super) mod filter;
pub(super) mod move_mode;
pub(super) mod navigation;
