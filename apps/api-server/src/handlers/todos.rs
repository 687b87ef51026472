//! Task handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::Todo;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateTodoRequest, TodoListQuery, UpdateTodoRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_PRIORITY: u8 = 5;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Todo> {
    state
        .todos
        .get(id)
        .await?
        .filter(|todo| todo.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))
}

/// POST /api/todo
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateTodoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if req.priority.is_some_and(|p| p > MAX_PRIORITY) {
        return Err(AppError::BadRequest(
            "Priority must be between 0 and 5".to_string(),
        ));
    }

    let mut todo = Todo::new(identity.user_id, req.title);
    if let Some(description) = req.description {
        todo.description = description;
    }
    if let Some(is_roadmap) = req.is_roadmap {
        todo.is_roadmap = is_roadmap;
    }
    if let Some(priority) = req.priority {
        todo.priority = priority;
    }
    if let Some(due_days) = req.due_days {
        todo.due_days = due_days;
    }
    todo.start_date = req.start_date;
    if let Some(status) = req.status {
        todo.status = status;
    }
    todo.parent_id = req.parent_id;
    todo.project_id = req.project_id;
    todo.roadmap_id = req.roadmap_id;

    let saved = state.todos.insert(todo).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Todo created successfully", saved)))
}

/// GET /api/todo
pub async fn list(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<TodoListQuery>,
) -> AppResult<HttpResponse> {
    let mut todos = state.todos.list(identity.user_id).await?;

    if let Some(project_id) = query.project_id {
        todos.retain(|todo| todo.project_id == Some(project_id));
    }
    if let Some(roadmap_id) = query.roadmap_id {
        todos.retain(|todo| todo.roadmap_id == Some(roadmap_id));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Todos fetched successfully", todos)))
}

/// GET /api/todo/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let todo = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Todo fetched successfully", todo)))
}

/// PATCH /api/todo/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTodoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut todo = fetch_owned(&state, &identity, path.into_inner()).await?;

    if req.priority.is_some_and(|p| p > MAX_PRIORITY) {
        return Err(AppError::BadRequest(
            "Priority must be between 0 and 5".to_string(),
        ));
    }

    if let Some(title) = req.title {
        todo.title = title;
    }
    if let Some(description) = req.description {
        todo.description = description;
    }
    if let Some(is_roadmap) = req.is_roadmap {
        todo.is_roadmap = is_roadmap;
    }
    if let Some(priority) = req.priority {
        todo.priority = priority;
    }
    if let Some(due_days) = req.due_days {
        todo.due_days = due_days;
    }
    if let Some(start_date) = req.start_date {
        todo.start_date = Some(start_date);
    }
    if let Some(status) = req.status {
        todo.status = status;
    }
    if let Some(parent_id) = req.parent_id {
        todo.parent_id = Some(parent_id);
    }
    if let Some(project_id) = req.project_id {
        todo.project_id = Some(project_id);
    }
    if let Some(roadmap_id) = req.roadmap_id {
        todo.roadmap_id = Some(roadmap_id);
    }
    todo.updated_at = chrono::Utc::now();

    let saved = state.todos.update(todo).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Todo updated successfully", saved)))
}

/// DELETE /api/todo/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let todo = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.todos.soft_delete(todo.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Todo deleted successfully")))
}
