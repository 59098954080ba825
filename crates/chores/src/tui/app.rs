use anyhow::Result;
use chores_app::{Clock, StateStore, TaskService};
use chores_core::{FilterMode, Task, TaskId};
use time::Date;

/// Application state shared between the TUI event loop and rendering.
///
/// Wraps the [`TaskService`] with view concerns: the active filter, the
/// visible id sequence derived from it, and the selection. Every mutation
/// goes through the service (which persists) and then rebuilds visibility,
/// keeping the selection on the same task where possible.
pub(super) struct App<S, C> {
    service: TaskService<S, C>,
    filter: FilterMode,
    /// Ids visible under the filter, in store order.
    visible: Vec<TaskId>,
    /// Selection position within `visible`.
    selected: usize,
}

impl<S: StateStore, C: Clock> App<S, C> {
    pub(super) fn new(service: TaskService<S, C>, filter: FilterMode) -> Self {
        let mut app = Self {
            service,
            filter,
            visible: Vec::new(),
            selected: 0,
        };
        app.rebuild_visibility(None);
        app
    }

    pub(super) const fn service(&self) -> &TaskService<S, C> {
        &self.service
    }

    pub(super) const fn filter(&self) -> FilterMode {
        self.filter
    }

    pub(super) fn set_filter(&mut self, filter: FilterMode) {
        if self.filter == filter {
            return;
        }
        let keep = self.selected_task_id();
        self.filter = filter;
        self.rebuild_visibility(keep);
    }

    pub(super) const fn has_visible_tasks(&self) -> bool {
        !self.visible.is_empty()
    }

    pub(super) fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.visible
            .iter()
            .filter_map(|&id| self.service.list().get(id))
    }

    pub(super) fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Counts of (all, active, completed) tasks for the filter bar.
    pub(super) fn counts(&self) -> (usize, usize, usize) {
        let all = self.service.list().len();
        let active = self.service.list().filtered(FilterMode::Active).count();
        (all, active, all - active)
    }

    pub(super) const fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.visible.get(self.selected).copied()
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.selected_task_id().and_then(|id| self.service.list().get(id))
    }

    pub(super) fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub(super) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Add a task; returns the new id unless the text was blank.
    pub(super) fn add(&mut self, text: &str, deadline: Option<Date>) -> Result<Option<TaskId>> {
        let id = self.service.add(text, deadline)?;
        self.rebuild_visibility(id.or_else(|| self.selected_task_id()));
        Ok(id)
    }

    /// Toggle completion of the selected task.
    pub(super) fn toggle_selected(&mut self) -> Result<bool> {
        let Some(id) = self.selected_task_id() else {
            return Ok(false);
        };
        let changed = self.service.toggle(id)?;
        // The toggled task may drop out of the current view; keep it when it
        // stays, clamp otherwise.
        self.rebuild_visibility(Some(id));
        Ok(changed)
    }

    /// Commit an edit session's text.
    pub(super) fn edit(&mut self, id: TaskId, text: &str) -> Result<bool> {
        let changed = self.service.edit(id, text)?;
        self.rebuild_visibility(Some(id));
        Ok(changed)
    }

    /// Delete the selected task.
    pub(super) fn remove_selected(&mut self) -> Result<bool> {
        let Some(id) = self.selected_task_id() else {
            return Ok(false);
        };
        let changed = self.service.remove(id)?;
        self.rebuild_visibility(None);
        Ok(changed)
    }

    /// Move `id` one slot up or down within the visible sequence. Hidden
    /// tasks keep their absolute positions (slot splice rule).
    pub(super) fn move_within_view(&mut self, id: TaskId, delta: isize) -> Result<bool> {
        let Some(pos) = self.visible.iter().position(|&v| v == id) else {
            return Ok(false);
        };
        let Some(neighbor_pos) = pos.checked_add_signed(delta) else {
            return Ok(false);
        };
        let Some(&dest) = self.visible.get(neighbor_pos) else {
            return Ok(false);
        };
        let changed = self.service.reorder_visible(id, dest, self.filter)?;
        self.rebuild_visibility(Some(id));
        Ok(changed)
    }

    fn rebuild_visibility(&mut self, keep: Option<TaskId>) {
        self.visible = self
            .service
            .list()
            .filtered(self.filter)
            .map(|task| task.id)
            .collect();
        self.selected = self.resolve_selection(keep);
    }

    fn resolve_selection(&self, preferred: Option<TaskId>) -> usize {
        if self.visible.is_empty() {
            return 0;
        }
        if let Some(id) = preferred
            && let Some(index) = self.visible.iter().position(|&v| v == id)
        {
            return index;
        }
        self.selected.min(self.visible.len() - 1)
    }
}
