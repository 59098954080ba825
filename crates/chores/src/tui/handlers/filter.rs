use chores_app::{Clock, StateStore};
use chores_core::FilterMode;

use super::super::view::Ui;

impl<S: StateStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn set_filter(&mut self, mode: FilterMode) {
        if self.app.filter() == mode {
            return;
        }
        self.app.set_filter(mode);
        if self.app.has_visible_tasks() {
            self.info(format!("filter: {mode}"));
        } else {
            self.info(format!("filter: {mode} (no matches)"));
        }
    }

    pub(in crate::tui) fn cycle_filter(&mut self) {
        self.set_filter(self.app.filter().cycled());
    }
}
