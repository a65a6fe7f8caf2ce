//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Walk the add/remove scenario and print each outcome deterministically.
//!
//! Set `TASKLIST_LOG_DIR` to an absolute path to also write core logs.

use tasklist_core::{
    init_logging, ListChange, ListResult, LogConfig, ReadOnlyTaskList, Task, TaskList,
};

fn main() {
    println!("tasklist_core version={}", tasklist_core::core_version());

    if let Ok(log_dir) = std::env::var("TASKLIST_LOG_DIR") {
        match LogConfig::with_default_level(&log_dir).and_then(|config| init_logging(&config)) {
            Ok(()) => println!("logging=on dir={log_dir}"),
            Err(err) => println!("logging=off reason={err}"),
        }
    }

    let mut model = TaskList::new();
    model
        .tasks()
        .subscribe(|change: &ListChange<Task>| println!("  change={}", change.kind()));

    for name in ["Buy milk", "Buy milk", "Walk dog"] {
        println!("{}", run_op("add", name, |task| model.add_task(task)));
    }
    for name in ["Buy milk", "Buy milk"] {
        println!(
            "{}",
            run_op("remove", name, |task| model.remove_task(&task).map(|_| ()))
        );
    }

    for task in model.tasks() {
        println!("task {task}");
    }
}

/// Builds a task from `name`, runs `op` on it and renders the outcome.
///
/// Invalid names never reach `op` and are reported as `status=invalid`.
fn run_op(op: &str, name: &str, apply: impl FnOnce(Task) -> ListResult<()>) -> String {
    match Task::new(name) {
        Ok(task) => match apply(task) {
            Ok(()) => format!("{op} name={name} status=ok"),
            Err(err) => format!("{op} name={name} status=error reason={err}"),
        },
        Err(err) => format!("{op} name={name} status=invalid reason={err}"),
    }
}
