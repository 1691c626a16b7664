//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! so the client never links against axum or sqlx. The integration test runs
//! the real server and catches any schema drift.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. New todos always start out not
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub task: String,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// An update that flips `todo`'s completion flag. The task is resent
    /// unchanged so the request carries the full item.
    pub fn toggle(todo: &Todo) -> Self {
        Self {
            task: Some(todo.task.clone()),
            completed: Some(!todo.completed),
        }
    }
}

/// Completion summary over a list of todos ("3 of 5 completed").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(todos: &[Todo]) -> Self {
        Self {
            completed: todos.iter().filter(|t| t.completed).count(),
            total: todos.len(),
        }
    }

    /// Share of completed todos in `0.0..=100.0`; zero for an empty list.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            task: format!("task {id}"),
            completed,
        }
    }

    #[test]
    fn toggle_flips_completed_and_keeps_task() {
        let update = UpdateTodo::toggle(&todo(3, false));
        assert_eq!(update.task.as_deref(), Some("task 3"));
        assert_eq!(update.completed, Some(true));
    }

    #[test]
    fn progress_counts_completed() {
        let todos = [todo(1, true), todo(2, false), todo(3, true), todo(4, false)];
        let progress = Progress::of(&todos);
        assert_eq!(progress, Progress { completed: 2, total: 4 });
        assert_eq!(progress.percent(), 50.0);
    }

    #[test]
    fn progress_of_empty_list_is_zero() {
        assert_eq!(Progress::of(&[]).percent(), 0.0);
    }

    #[test]
    fn update_todo_omits_absent_fields() {
        let json = serde_json::to_value(UpdateTodo {
            completed: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"completed": true}));
    }
}
