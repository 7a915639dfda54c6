use crate::calendar::{self, MONTH_NAMES};
use crate::errors::AppError;
use crate::models::{
    AddTaskRequest, AddTaskResponse, DeleteTaskQuery, DeleteTaskResponse, MonthQuery, MonthView,
    OptionsResponse, SelectRequest, TaskListResponse, ToggleRequest,
};
use crate::state::{AppState, Tracker};
use crate::storage::persist_data;
use crate::tasks;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::{debug, info};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn list_tasks(State(state): State<AppState>) -> Json<TaskListResponse> {
    let tracker = state.tracker.lock().await;
    Json(TaskListResponse {
        tasks: tasks::list_tasks(&tracker.data),
        selected: tracker.selected.clone(),
    })
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<AddTaskResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let added = tasks::add_task(&mut tracker.data, &payload.name);
    if added {
        persist_data(&state.data_path, &tracker.data).await?;
        info!("added task '{}'", payload.name.trim());
    } else {
        debug!("ignored empty or duplicate task name");
    }

    Ok(Json(AddTaskResponse {
        added,
        tasks: tasks::list_tasks(&tracker.data),
        selected: tracker.selected.clone(),
    }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<DeleteTaskQuery>,
) -> Result<Json<DeleteTaskResponse>, AppError> {
    if !query.confirm {
        return Err(AppError::bad_request("deleting a task requires confirm=true"));
    }

    let mut tracker = state.tracker.lock().await;
    let deleted = tracker.delete_task(&name, true);
    if deleted {
        persist_data(&state.data_path, &tracker.data).await?;
        info!("deleted task '{name}'");
    }

    Ok(Json(DeleteTaskResponse {
        deleted,
        tasks: tasks::list_tasks(&tracker.data),
        selected: tracker.selected.clone(),
    }))
}

pub async fn select_task(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<MonthView>, AppError> {
    let (year, month) = resolve_month(payload.year, payload.month)?;
    let mut tracker = state.tracker.lock().await;
    tracker.select(&payload.task)?;
    debug!("selected task '{}'", payload.task);

    let view = render_selected(&state, &mut tracker, year, month).await?;
    Ok(Json(view))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthView>, AppError> {
    let (year, month) = resolve_month(query.year, query.month)?;
    let mut tracker = state.tracker.lock().await;
    let view = render_selected(&state, &mut tracker, year, month).await?;
    Ok(Json(view))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<MonthView>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let task = tracker.selected_task()?;
    let view = calendar::toggle(&mut tracker.data, &task, &payload.date_key)?;
    persist_data(&state.data_path, &tracker.data).await?;
    info!("toggled {} for '{task}': {}", payload.date_key, view.summary);

    Ok(Json(view))
}

pub async fn get_options() -> Json<OptionsResponse> {
    let (current_year, current_month) = calendar::current_year_month();
    Json(OptionsResponse {
        months: MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
        years: calendar::year_options(current_year),
        current_year,
        current_month,
    })
}

async fn render_selected(
    state: &AppState,
    tracker: &mut Tracker,
    year: i32,
    month: u32,
) -> Result<MonthView, AppError> {
    let task = tracker.selected_task()?;
    let rendered = calendar::render_month(&mut tracker.data, &task, year, month)?;
    if rendered.materialized > 0 {
        persist_data(&state.data_path, &tracker.data).await?;
        debug!(
            "defaulted {} days to present for '{task}'",
            rendered.materialized
        );
    }

    Ok(rendered.view)
}

// Validated before the selection changes.
fn resolve_month(year: Option<i32>, month: Option<u32>) -> Result<(i32, u32), AppError> {
    let (current_year, current_month) = calendar::current_year_month();
    let year = year.unwrap_or(current_year);
    let month = month.unwrap_or(current_month);
    calendar::check_month(year, month)?;
    Ok((year, month))
}
