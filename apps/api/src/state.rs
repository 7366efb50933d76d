use std::sync::Arc;

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::resume::extract::TextExtractor;
use crate::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main` before the listener binds; never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Job document store. Default: PgJobStore.
    pub jobs: Arc<dyn JobStore>,
    /// Resume text extraction. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub skills: Arc<SkillVocabulary>,
    pub config: Config,
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        db_max_connections: 1,
        skills_file: None,
        max_upload_bytes: crate::config::DEFAULT_MAX_UPLOAD_BYTES,
    }
}

/// State over `jobs` with the real PDF extractor and built-in vocabulary.
#[cfg(test)]
pub fn test_state(jobs: Arc<dyn JobStore>) -> AppState {
    AppState {
        jobs,
        extractor: Arc::new(crate::resume::extract::PdfTextExtractor),
        skills: Arc::new(SkillVocabulary::builtin()),
        config: test_config(),
    }
}
