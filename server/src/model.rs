//! The `Todo` entity and its request payloads.
//!
//! # Design
//! `Todo` is both the row type (`sqlx::FromRow`) and the response body, since
//! the table columns and the JSON shape are identical. Request payloads keep
//! every field optional so that presence is checked explicitly instead of
//! failing inside the JSON extractor.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// Longest task text the `todo.task` column accepts.
pub const TASK_MAX_LEN: usize = 200;

/// A single todo row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub task: Option<String>,
}

impl CreateTodo {
    /// Returns the task text, or a validation error when it is missing or too
    /// long.
    pub fn into_task(self) -> Result<String, ApiError> {
        let task = self
            .task
            .ok_or_else(|| ApiError::Validation("Missing required field: task".to_string()))?;
        check_task_len(&task)?;
        Ok(task)
    }
}

/// Body of `PUT /api/todos/{id}`. Absent (or `null`) fields keep their stored
/// value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.task {
            Some(task) => check_task_len(task),
            None => Ok(()),
        }
    }

    /// Overwrite only the fields present in this update.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(task) = self.task {
            todo.task = task;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

fn check_task_len(task: &str) -> Result<(), ApiError> {
    if task.chars().count() > TASK_MAX_LEN {
        return Err(ApiError::Validation(format!(
            "task must be at most {TASK_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Body of a successful `DELETE`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
