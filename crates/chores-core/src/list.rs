use crate::filter::FilterMode;
use crate::id::TaskId;
use crate::task::Task;
use std::collections::HashSet;
use time::{Date, OffsetDateTime};

/// Ordered collection of tasks; the source of truth for every view.
///
/// Order is user-controlled and canonical for the [`FilterMode::All`] view.
/// Every mutation degrades to a no-op on invalid input (blank text, unknown
/// id, coincident positions) so callers never observe an error from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Build a list from persisted tasks, keeping the first occurrence of
    /// any duplicated id.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::new();
        let tasks = tasks
            .into_iter()
            .filter(|task| seen.insert(task.id))
            .collect();
        Self { tasks }
    }

    /// Canonical-order view of every task.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consume the list, yielding its tasks in canonical order.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Canonical index of a task.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Append a fresh task. Blank (post-trim) text is a silent no-op.
    pub fn add(&mut self, text: &str, deadline: Option<Date>, now: OffsetDateTime) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed.to_owned(), deadline, now);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Flip completion of the task with `id`, stamping or clearing
    /// `completed_at` in the same step. Returns whether the id resolved.
    pub fn toggle(&mut self, id: TaskId, now: OffsetDateTime) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.toggle(now);
        true
    }

    /// Replace the text of the task with `id`. Blank replacement text or an
    /// unknown id is a no-op.
    pub fn edit(&mut self, id: TaskId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.text = trimmed.to_owned();
        true
    }

    /// Remove the task with `id` unconditionally.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        true
    }

    /// Move the task with `id` to `new_index` (clamped), shifting the tasks
    /// in between by one. A no-op when the position does not change.
    pub fn move_to(&mut self, id: TaskId, new_index: usize) -> bool {
        let Some(current) = self.position(id) else {
            return false;
        };
        let target = new_index.min(self.tasks.len() - 1);
        if current == target {
            return false;
        }
        let task = self.tasks.remove(current);
        self.tasks.insert(target, task);
        true
    }

    /// Move `source` to the canonical position currently held by `dest`.
    pub fn reorder(&mut self, source: TaskId, dest: TaskId) -> bool {
        self.reorder_visible(source, dest, FilterMode::All)
    }

    /// Reorder `source` relative to `dest` within the subsequence visible
    /// under `mode`.
    ///
    /// Splice rule: the canonical slots occupied by visible tasks are fixed,
    /// and the reordered visible sequence is written back into exactly those
    /// slots. Hidden tasks therefore keep their absolute positions. Moving
    /// up lands before `dest`, moving down lands after it.
    pub fn reorder_visible(&mut self, source: TaskId, dest: TaskId, mode: FilterMode) -> bool {
        let slots: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| mode.matches(task))
            .map(|(index, _)| index)
            .collect();

        let Some(src_pos) = slots.iter().position(|&i| self.tasks[i].id == source) else {
            return false;
        };
        let Some(dst_pos) = slots.iter().position(|&i| self.tasks[i].id == dest) else {
            return false;
        };
        if src_pos == dst_pos {
            return false;
        }

        // Reorder the visible sequence, then splice it back into its slots.
        let mut order = slots.clone();
        let moved = order.remove(src_pos);
        order.insert(dst_pos, moved);

        let mut taken: Vec<Option<Task>> = self.tasks.drain(..).map(Some).collect();
        let mut rearranged: Vec<Option<Task>> = (0..taken.len()).map(|_| None).collect();
        for (&slot, &task_index) in slots.iter().zip(order.iter()) {
            rearranged[slot] = taken[task_index].take();
        }
        for (index, task) in taken.into_iter().enumerate() {
            if task.is_some() {
                rearranged[index] = task;
            }
        }
        self.tasks = rearranged.into_iter().flatten().collect();
        true
    }

    /// Non-destructive view of the tasks visible under `mode`, preserving
    /// store order.
    pub fn filtered(&self, mode: FilterMode) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| mode.matches(task))
    }
}
