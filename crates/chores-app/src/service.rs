use anyhow::{Context, Result};
use chores_core::{FilterMode, TaskId, TaskList};
use time::Date;

use crate::clock::Clock;
use crate::store::StateStore;

/// Owns the in-memory task list and keeps the persisted slot in sync.
///
/// The collection is loaded once at construction; after every mutation that
/// actually changed something the whole collection is written back. No-op
/// mutations (blank text, unknown ids, coincident positions) never write.
pub struct TaskService<S, C> {
    store: S,
    clock: C,
    list: TaskList,
}

impl<S: StateStore, C: Clock> TaskService<S, C> {
    /// Load the persisted collection and wrap it in a service.
    pub fn new(store: S, clock: C) -> Self {
        let list = TaskList::from_tasks(store.load_tasks());
        Self { store, clock, list }
    }

    /// The current task collection.
    #[must_use]
    pub const fn list(&self) -> &TaskList {
        &self.list
    }

    /// The injected storage capability, for concerns persisted outside the
    /// task collection (the theme slot).
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Add a task; blank text is a silent no-op.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn add(&mut self, text: &str, deadline: Option<Date>) -> Result<Option<TaskId>> {
        let id = self.list.add(text, deadline, self.clock.now());
        if id.is_some() {
            self.persist()?;
        }
        Ok(id)
    }

    /// Flip completion of a task.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool> {
        let changed = self.list.toggle(id, self.clock.now());
        self.persist_if(changed)
    }

    /// Replace a task's text.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn edit(&mut self, id: TaskId, text: &str) -> Result<bool> {
        let changed = self.list.edit(id, text);
        self.persist_if(changed)
    }

    /// Delete a task unconditionally.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn remove(&mut self, id: TaskId) -> Result<bool> {
        let changed = self.list.remove(id);
        self.persist_if(changed)
    }

    /// Move a task to a canonical index.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn move_to(&mut self, id: TaskId, new_index: usize) -> Result<bool> {
        let changed = self.list.move_to(id, new_index);
        self.persist_if(changed)
    }

    /// Move `source` to the slot currently held by `dest`.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn reorder(&mut self, source: TaskId, dest: TaskId) -> Result<bool> {
        let changed = self.list.reorder(source, dest);
        self.persist_if(changed)
    }

    /// Reorder within the subsequence visible under `mode`; hidden tasks
    /// keep their absolute positions.
    ///
    /// # Errors
    /// Returns an error when the changed collection cannot be persisted.
    pub fn reorder_visible(&mut self, source: TaskId, dest: TaskId, mode: FilterMode) -> Result<bool> {
        let changed = self.list.reorder_visible(source, dest, mode);
        self.persist_if(changed)
    }

    fn persist_if(&self, changed: bool) -> Result<bool> {
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    fn persist(&self) -> Result<()> {
        self.store
            .save_tasks(self.list.tasks())
            .context("failed to persist task collection")
    }
}
