//! Domain types and pure logic for chores task lists.
//!
//! The [`TaskList`] here is the single source of truth for every view:
//! mutations are synchronous, invalid input degrades to a no-op, and the
//! collection order is user-controlled and significant.

/// View filter predicates.
pub mod filter;
/// Identifier types.
pub mod id;
/// The ordered task collection.
pub mod list;
/// The task record itself.
pub mod task;

pub use filter::{FilterMode, ParseFilterError};
pub use id::TaskId;
pub use list::TaskList;
pub use task::{Task, parse_deadline};
