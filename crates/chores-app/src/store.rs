use anyhow::Result;
use chores_core::Task;

use crate::theme::Theme;

/// Persistence capability injected into the application layer so the logic
/// stays unit-testable without touching the filesystem.
///
/// Two independent slots: the task collection and the theme preference.
/// Loads are infallible by contract — an adapter that finds missing or
/// malformed data degrades silently to the empty value rather than
/// surfacing an error.
pub trait StateStore {
    /// Read the whole task collection. Called once at startup.
    fn load_tasks(&self) -> Vec<Task>;

    /// Overwrite the whole task collection. Invoked after every mutation;
    /// last writer wins across concurrent processes.
    ///
    /// # Errors
    /// Returns an error when the slot cannot be written.
    fn save_tasks(&self, tasks: &[Task]) -> Result<()>;

    /// Read the stored theme preference, if one was ever saved.
    fn load_theme(&self) -> Option<Theme>;

    /// Persist the theme preference, independently of task data.
    ///
    /// # Errors
    /// Returns an error when the slot cannot be written.
    fn save_theme(&self, theme: Theme) -> Result<()>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load_tasks(&self) -> Vec<Task> {
        (**self).load_tasks()
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        (**self).save_tasks(tasks)
    }

    fn load_theme(&self) -> Option<Theme> {
        (**self).load_theme()
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        (**self).save_theme(theme)
    }
}
