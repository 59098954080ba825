use super::app::App;
use super::view::{Mode, Ui};
use anyhow::Result;
use chores_app::{FixedClock, StateStore, TaskService, Theme};
use chores_core::{FilterMode, Task};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::time::Duration;
use time::macros::datetime;

struct MockStore {
    tasks: RefCell<Vec<Task>>,
    theme: RefCell<Option<Theme>>,
    saves: RefCell<usize>,
}

impl MockStore {
    fn new() -> Self {
        Self {
            tasks: RefCell::new(Vec::new()),
            theme: RefCell::new(None),
            saves: RefCell::new(0),
        }
    }

    fn with_tasks(tasks: Vec<Task>) -> Self {
        let store = Self::new();
        *store.tasks.borrow_mut() = tasks;
        store
    }

    fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    fn texts(&self) -> Vec<String> {
        self.tasks
            .borrow()
            .iter()
            .map(|task| task.text.clone())
            .collect()
    }
}

impl StateStore for MockStore {
    fn load_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn load_theme(&self) -> Option<Theme> {
        *self.theme.borrow()
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        *self.theme.borrow_mut() = Some(theme);
        Ok(())
    }
}

const NOW: time::OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

fn task(text: &str) -> Task {
    Task::new(text.into(), None, datetime!(2024-04-01 08:00 UTC))
}

fn completed_task(text: &str) -> Task {
    let mut task = task(text);
    task.complete(datetime!(2024-04-02 09:00 UTC));
    task
}

fn test_ui(store: &MockStore) -> Ui<&MockStore, FixedClock> {
    test_ui_with_flash_ttl(store, Duration::from_millis(1200))
}

fn test_ui_with_flash_ttl(store: &MockStore, flash_ttl: Duration) -> Ui<&MockStore, FixedClock> {
    let service = TaskService::new(store, FixedClock(NOW));
    let app = App::new(service, FilterMode::All);
    Ui::new(app, Theme::Dark, flash_ttl)
}

fn press(ui: &mut Ui<&MockStore, FixedClock>, code: KeyCode) {
    ui.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handling must not fail with a mock store");
}

fn type_text(ui: &mut Ui<&MockStore, FixedClock>, text: &str) {
    for ch in text.chars() {
        press(ui, KeyCode::Char(ch));
    }
}

#[test]
fn typing_into_the_add_bar_creates_a_task() {
    let store = MockStore::new();
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('a'));
    assert!(matches!(ui.mode, Mode::Adding(_)));
    type_text(&mut ui, "Buy milk");
    press(&mut ui, KeyCode::Enter);

    assert_eq!(store.texts(), vec!["Buy milk"]);
    assert_eq!(store.save_count(), 1);
    let added = ui.app.selected_task().expect("new task is selected").id;
    assert!(ui.is_flashed(added));
    assert!(matches!(ui.mode, Mode::Browse));
}

#[test]
fn blank_add_is_a_silent_no_op() {
    let store = MockStore::new();
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "   ");
    press(&mut ui, KeyCode::Enter);

    assert!(store.texts().is_empty());
    assert_eq!(store.save_count(), 0);
    assert!(ui.message.is_none());
}

#[test]
fn add_bar_parses_a_trailing_deadline() {
    let store = MockStore::new();
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "File taxes @2024-06-15");
    press(&mut ui, KeyCode::Enter);

    let tasks = store.tasks.borrow();
    assert_eq!(tasks[0].text, "File taxes");
    assert_eq!(
        tasks[0].deadline,
        Some(time::macros::date!(2024 - 06 - 15))
    );
}

#[test]
fn edit_session_commits_on_enter() {
    let store = MockStore::with_tasks(vec![task("draft")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('e'));
    assert!(matches!(ui.mode, Mode::Editing { .. }));
    type_text(&mut ui, " v2");
    press(&mut ui, KeyCode::Enter);

    assert_eq!(store.texts(), vec!["draft v2"]);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn edit_session_escape_discards_without_mutating() {
    let store = MockStore::with_tasks(vec![task("draft")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('e'));
    type_text(&mut ui, " scribbles");
    press(&mut ui, KeyCode::Esc);

    assert_eq!(store.texts(), vec!["draft"]);
    assert_eq!(store.save_count(), 0);
    assert!(matches!(ui.mode, Mode::Browse));
}

#[test]
fn focus_loss_commits_a_pending_edit() {
    let store = MockStore::with_tasks(vec![task("draft")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('e'));
    type_text(&mut ui, " blurred");
    ui.handle_focus_lost().expect("focus handling must not fail");

    assert_eq!(store.texts(), vec!["draft blurred"]);
    assert!(matches!(ui.mode, Mode::Browse));
}

#[test]
fn focus_loss_discards_a_half_typed_add() {
    let store = MockStore::new();
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "unfini");
    ui.handle_focus_lost().expect("focus handling must not fail");

    assert!(store.texts().is_empty());
    assert!(matches!(ui.mode, Mode::Browse));
}

#[test]
fn toggle_stamps_completion_from_the_injected_clock() {
    let store = MockStore::with_tasks(vec![task("Buy milk")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('x'));
    {
        let tasks = store.tasks.borrow();
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].completed_at, Some(NOW));
    }

    press(&mut ui, KeyCode::Char('x'));
    let tasks = store.tasks.borrow();
    assert!(!tasks[0].completed);
    assert!(tasks[0].completed_at.is_none());
}

#[test]
fn toggle_under_active_filter_drops_the_task_from_view() {
    let store = MockStore::with_tasks(vec![task("A"), task("B")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('2'));
    assert_eq!(ui.app.visible_len(), 2);

    press(&mut ui, KeyCode::Char('x'));
    assert_eq!(ui.app.visible_len(), 1);
    // Selection stays in bounds on the remaining task.
    assert_eq!(
        ui.app.selected_task().map(|task| task.text.as_str()),
        Some("B")
    );
}

#[test]
fn filter_keys_and_tab_cycle_the_view() {
    let store = MockStore::with_tasks(vec![task("open"), completed_task("closed")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('2'));
    assert_eq!(ui.app.filter(), FilterMode::Active);
    assert_eq!(ui.app.visible_len(), 1);

    press(&mut ui, KeyCode::Char('3'));
    assert_eq!(ui.app.filter(), FilterMode::Completed);
    assert_eq!(
        ui.app.selected_task().map(|task| task.text.as_str()),
        Some("closed")
    );

    press(&mut ui, KeyCode::Tab);
    assert_eq!(ui.app.filter(), FilterMode::All);
    assert_eq!(ui.app.visible_len(), 2);
}

#[test]
fn move_mode_reorders_within_the_filtered_view() {
    let store = MockStore::with_tasks(vec![task("C"), task("A"), completed_task("B")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('2')); // Active view: [C, A]
    press(&mut ui, KeyCode::Char('j')); // select A
    press(&mut ui, KeyCode::Char('m'));
    assert!(matches!(ui.mode, Mode::Moving { .. }));

    press(&mut ui, KeyCode::Char('k')); // A above C
    assert_eq!(store.texts(), vec!["A", "C", "B"]);

    press(&mut ui, KeyCode::Enter);
    assert!(matches!(ui.mode, Mode::Browse));
    // The moved task is still selected.
    assert_eq!(
        ui.app.selected_task().map(|task| task.text.as_str()),
        Some("A")
    );
}

#[test]
fn move_mode_at_the_top_edge_is_a_no_op() {
    let store = MockStore::with_tasks(vec![task("A"), task("B")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('m'));
    press(&mut ui, KeyCode::Char('k'));

    assert_eq!(store.texts(), vec!["A", "B"]);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn add_flash_expires_after_its_ttl() {
    let store = MockStore::new();
    let mut ui = test_ui_with_flash_ttl(&store, Duration::ZERO);

    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "Buy milk");
    press(&mut ui, KeyCode::Enter);

    let added = ui.app.selected_task().expect("new task is selected").id;
    assert!(ui.is_flashed(added));

    ui.tick();
    assert!(!ui.is_flashed(added));
    // The task itself outlives the cosmetic highlight.
    assert_eq!(store.texts(), vec!["Buy milk"]);
}

#[test]
fn theme_toggle_persists_the_preference() {
    let store = MockStore::new();
    let mut ui = test_ui(&store);
    assert_eq!(ui.theme, Theme::Dark);

    press(&mut ui, KeyCode::Char('t'));
    assert_eq!(ui.theme, Theme::Light);
    assert_eq!(*store.theme.borrow(), Some(Theme::Light));
}

#[test]
fn delete_clamps_the_selection() {
    let store = MockStore::with_tasks(vec![task("A"), task("B")]);
    let mut ui = test_ui(&store);

    press(&mut ui, KeyCode::Char('j'));
    press(&mut ui, KeyCode::Char('d'));

    assert_eq!(store.texts(), vec!["A"]);
    assert_eq!(
        ui.app.selected_task().map(|task| task.text.as_str()),
        Some("A")
    );
}

#[test]
fn quit_key_sets_the_flag() {
    let store = MockStore::new();
    let mut ui = test_ui(&store);
    press(&mut ui, KeyCode::Char('q'));
    assert!(ui.should_quit);
}
