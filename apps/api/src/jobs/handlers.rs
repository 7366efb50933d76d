//! Axum route handlers for the job listing endpoints.

use std::collections::BTreeSet;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::jobs::pagination::{page_from_query, page_offset, Paginated, PAGE_SIZE};
use crate::models::job::Job;
use crate::state::AppState;

/// Raw query pairs in request order. Keys may repeat.
type QueryPairs = Query<Vec<(String, String)>>;

/// GET /jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state
        .jobs
        .list_all()
        .await
        .map_err(|e| e.with_public_message("Error fetching jobs"))?;
    Ok(Json(jobs))
}

/// GET /alljobs?page=<n>
///
/// Fixed pages of 20. An unusable `page` value is read as page 1.
pub async fn handle_list_jobs_paginated(
    State(state): State<AppState>,
    query: Result<QueryPairs, QueryRejection>,
) -> Result<Json<Paginated<Job>>, AppError> {
    let page = match query {
        Ok(Query(pairs)) => page_from_query(&pairs),
        Err(e) => {
            debug!("Unreadable query string, serving page 1: {e}");
            1
        }
    };
    let fetch = async {
        let items = state.jobs.list_range(page_offset(page), PAGE_SIZE).await?;
        let total_items = state.jobs.count().await?;
        Ok::<_, AppError>(Paginated::new(total_items, page, items))
    };
    let body = fetch
        .await
        .map_err(|e| e.with_public_message("Error fetching jobs"))?;
    Ok(Json(body))
}

/// GET /job/:id
///
/// `:id` is matched against the document's `job_id`, not the store key.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .jobs
        .find_by_job_id(&job_id)
        .await
        .map_err(|e| e.with_public_message("Error fetching job details"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
}

/// GET /favjobs?ids=<csv>
///
/// A repeated `ids` parameter is read as one list (`ids=a&ids=b` is `ids=a,b`).
pub async fn handle_fav_jobs(
    State(state): State<AppState>,
    query: Result<QueryPairs, QueryRejection>,
) -> Result<Json<Vec<Job>>, AppError> {
    let Query(pairs) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let raw = pairs
        .iter()
        .filter(|(key, value)| key == "ids" && !value.is_empty())
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(",");
    if raw.is_empty() {
        return Err(AppError::Validation("No job IDs provided".to_string()));
    }
    let ids = split_ids(&raw);
    debug!("Fetching {} favourite jobs", ids.len());

    let jobs = state
        .jobs
        .find_by_job_ids(&ids)
        .await
        .map_err(|e| e.with_public_message("Server error"))?;
    Ok(Json(jobs))
}

/// Splits on commas without trimming and drops repeated ids.
fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
