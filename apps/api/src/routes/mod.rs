pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::resume::handlers::handle_upload_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Job listings
        .route("/jobs", get(handlers::handle_list_jobs))
        .route("/alljobs", get(handlers::handle_list_jobs_paginated))
        .route("/job/:id", get(handlers::handle_get_job))
        .route("/favjobs", get(handlers::handle_fav_jobs))
        // Resume matching
        .route(
            "/upload-resume",
            post(handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
