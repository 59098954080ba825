use anyhow::{Context, Result};
use chores_app::{SystemClock, TaskService};
use chores_core::{Task, TaskId, parse_deadline};
use chores_store_fs::FsStore;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::config::Config;
use crate::{Command, tui};

/// Execute a CLI command against the store.
pub fn run(command: Command, store: &FsStore, config: &Config) -> Result<()> {
    if matches!(command, Command::Tui) {
        return tui::run(store, config);
    }

    let mut service = TaskService::new(store, SystemClock);
    match command {
        Command::Add { text, deadline } => {
            let deadline = deadline
                .map(|raw| parse_deadline(&raw))
                .transpose()
                .context("invalid deadline, expected YYYY-MM-DD")?;
            // Blank text is a silent no-op, matching the TUI surface.
            if let Some(id) = service.add(&text, deadline)? {
                println!("added {id}");
            }
        }

        Command::Ls { filter } => {
            for (index, task) in service
                .list()
                .tasks()
                .iter()
                .enumerate()
                .filter(|(_, task)| filter.matches(task))
            {
                println!("{}", render_row(index, task));
            }
        }

        Command::Done { index } => {
            let id = task_at(&service, index)?;
            service.toggle(id)?;
            let state = service
                .list()
                .get(id)
                .is_some_and(|task| task.completed);
            println!("{}", if state { "completed" } else { "reopened" });
        }

        Command::Edit { index, text } => {
            let id = task_at(&service, index)?;
            if service.edit(id, &text)? {
                println!("updated");
            }
        }

        Command::Rm { index } => {
            let id = task_at(&service, index)?;
            service.remove(id)?;
            println!("deleted");
        }

        Command::Mv { from, to } => {
            let id = task_at(&service, from)?;
            service.move_to(id, to)?;
        }

        Command::Tui => {}
    }
    Ok(())
}

fn task_at<S, C>(service: &TaskService<S, C>, index: usize) -> Result<TaskId>
where
    S: chores_app::StateStore,
    C: chores_app::Clock,
{
    service
        .list()
        .tasks()
        .get(index)
        .map(|task| task.id)
        .with_context(|| format!("no task at index {index}"))
}

fn render_row(index: usize, task: &Task) -> String {
    let checkbox = if task.completed { "x" } else { " " };
    let mut row = format!("{index:>3} [{checkbox}] {}", task.text);
    if let Some(deadline) = task.deadline
        && let Ok(formatted) = deadline.format(format_description!("[year]-[month]-[day]"))
    {
        row.push_str(&format!("  @{formatted}"));
    }
    if let Some(completed_at) = task.completed_at
        && let Ok(formatted) = completed_at.format(&Rfc3339)
    {
        row.push_str(&format!("  done {formatted}"));
    }
    row
}
