use crate::calendar::{build_month_grid, build_week_grid};
use crate::errors::AppError;
use crate::metrics::compute_metrics_now;
use crate::models::{DayCell, DerivedMetrics, Entry, EntryDraft, DATE_FORMAT};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub owner: String,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub owner: String,
    pub date: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Json<Vec<Entry>> {
    let data = state.data.lock().await;
    Json(owned_entries(&data.entries, &query.owner))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(draft): Json<EntryDraft>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    validate_draft(&draft)?;

    let entry = draft.into_entry(Uuid::new_v4().to_string());
    let mut data = state.data.lock().await;
    data.entries.push(entry.clone());
    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EntryDraft>,
) -> Result<Json<Entry>, AppError> {
    validate_draft(&draft)?;

    let mut data = state.data.lock().await;
    let Some(existing) = data.entries.iter_mut().find(|entry| entry.id == id) else {
        return Err(AppError::not_found(format!("no entry with id {id}")));
    };

    // id and owner stay as created, everything else is replaced.
    let owner_id = existing.owner_id.clone();
    let mut updated = draft.into_entry(id);
    updated.owner_id = owner_id;
    *existing = updated.clone();

    persist_data(&state.data_path, &data).await?;
    Ok(Json(updated))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let before = data.entries.len();
    data.entries.retain(|entry| entry.id != id);
    if data.entries.len() == before {
        return Err(AppError::not_found(format!("no entry with id {id}")));
    }

    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Json<DerivedMetrics> {
    let data = state.data.lock().await;
    let entries = owned_entries(&data.entries, &query.owner);
    Json(compute_metrics_now(&entries, &state.config))
}

pub async fn get_month_grid(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<DayCell>>, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    let data = state.data.lock().await;
    let entries = owned_entries(&data.entries, &query.owner);
    Ok(Json(build_month_grid(
        &entries,
        query.year,
        query.month,
        today(),
    )))
}

pub async fn get_week_grid(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<Vec<DayCell>>, AppError> {
    let anchor = match query.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?,
        None => today(),
    };

    let data = state.data.lock().await;
    let entries = owned_entries(&data.entries, &query.owner);
    Ok(Json(build_week_grid(&entries, anchor, today())))
}

fn owned_entries(entries: &[Entry], owner: &str) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.owner_id == owner)
        .cloned()
        .collect()
}

fn validate_draft(draft: &EntryDraft) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    if NaiveDate::parse_from_str(&draft.date, DATE_FORMAT).is_err() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }
    if draft.hours < 0.0 {
        return Err(AppError::bad_request("hours must not be negative"));
    }
    if draft.owner_id.trim().is_empty() {
        return Err(AppError::bad_request("owner_id must not be empty"));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
