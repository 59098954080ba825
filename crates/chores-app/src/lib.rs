//! Application layer logic for chores.
//!
//! This crate provides the injected capabilities (storage, clock) and the
//! mutation/persistence orchestration shared by the CLI and TUI frontends.

pub mod clock;
pub mod service;
pub mod store;
pub mod theme;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use service::TaskService;
pub use store::StateStore;
pub use theme::{ParseThemeError, Theme};
