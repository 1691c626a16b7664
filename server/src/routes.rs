//! Request handlers for `/api/todos`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use crate::db::Database;
use crate::error::ApiError;
use crate::model::{CreateTodo, MessageResponse, Todo, UpdateTodo};

pub async fn list_todos(State(db): State<Database>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = db.todos().find_all().await?;
    debug!(count = todos.len(), "Listed todos");
    Ok(Json(todos))
}

pub async fn create_todo(
    State(db): State<Database>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = input?;
    let task = input.into_task()?;
    let todo = db.todos().insert(&task).await?;
    info!(id = todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(db): State<Database>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let mut todo = db.todos().find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let Json(input) = input?;
    input.validate()?;
    input.apply_to(&mut todo);

    // The row can vanish between lookup and save under a concurrent delete.
    if !db.todos().save(&todo).await? {
        return Err(ApiError::NotFound);
    }
    info!(id, completed = todo.completed, "Updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(db): State<Database>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    if !db.todos().delete_by_id(id).await? {
        return Err(ApiError::NotFound);
    }
    info!(id, "Deleted todo");
    Ok(Json(MessageResponse::new("Todo deleted")))
}

pub async fn fallback() -> ApiError {
    ApiError::NoRoute
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
