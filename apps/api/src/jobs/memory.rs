//! In-process `JobStore` implementations for handler tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::jobs::store::JobStore;
use crate::models::job::Job;

/// Holds documents in insertion order, which stands in for store-native order.
pub struct MemoryJobStore {
    jobs: Vec<Job>,
}

impl MemoryJobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Builds a store from raw JSON documents.
    pub fn from_docs(docs: Vec<Value>) -> Self {
        let jobs = docs
            .into_iter()
            .map(|doc| serde_json::from_value(doc).expect("test document must decode"))
            .collect();
        Self::new(jobs)
    }

    /// `count` postings with ids `job1..=jobN`, alternating Rust/Python skills.
    pub fn numbered(count: usize) -> Self {
        let docs = (1..=count)
            .map(|n| {
                let skill = if n % 2 == 0 { "Python" } else { "Rust" };
                serde_json::json!({
                    "job_id": format!("job{n}"),
                    "title": format!("Engineer #{n}"),
                    "skills": [skill],
                })
            })
            .collect();
        Self::from_docs(docs)
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list_all(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.jobs.clone())
    }

    async fn list_range(&self, offset: u64, limit: u64) -> Result<Vec<Job>, AppError> {
        Ok(self
            .jobs
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.jobs.len() as u64)
    }

    async fn find_by_job_id(&self, job_id: &str) -> Result<Option<Job>, AppError> {
        Ok(self
            .jobs
            .iter()
            .find(|j| job_id_text(j).as_deref() == Some(job_id))
            .cloned())
    }

    async fn find_by_job_ids(&self, job_ids: &[String]) -> Result<Vec<Job>, AppError> {
        Ok(self
            .jobs
            .iter()
            .filter(|j| job_id_text(j).is_some_and(|id| job_ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn find_by_any_skill(&self, skills: &[String]) -> Result<Vec<Job>, AppError> {
        Ok(self
            .jobs
            .iter()
            .filter(|j| has_any_skill(j, skills))
            .cloned()
            .collect())
    }
}

/// `job_id` as Postgres `doc->>'job_id'` renders it: strings bare, scalars as JSON text.
fn job_id_text(job: &Job) -> Option<String> {
    match (&job.job_id, job.extra.get("job_id")) {
        (Some(id), _) => Some(id.clone()),
        (None, Some(Value::Null)) | (None, None) => None,
        (None, Some(other)) => Some(other.to_string()),
    }
}

/// Mirrors `doc->'skills' ?| wanted`: any string element of a `skills` array,
/// or a bare `skills` string, that is in `wanted`.
fn has_any_skill(job: &Job, wanted: &[String]) -> bool {
    if let Some(skills) = &job.skills {
        return skills.iter().any(|s| wanted.contains(s));
    }
    match job.extra.get("skills") {
        Some(Value::String(s)) => wanted.contains(s),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|s| wanted.iter().any(|w| w == s)),
        _ => false,
    }
}

/// Fails every query the way an unreachable database would.
pub struct FailingJobStore;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl JobStore for FailingJobStore {
    async fn list_all(&self) -> Result<Vec<Job>, AppError> {
        Err(unavailable())
    }

    async fn list_range(&self, _offset: u64, _limit: u64) -> Result<Vec<Job>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Err(unavailable())
    }

    async fn find_by_job_id(&self, _job_id: &str) -> Result<Option<Job>, AppError> {
        Err(unavailable())
    }

    async fn find_by_job_ids(&self, _job_ids: &[String]) -> Result<Vec<Job>, AppError> {
        Err(unavailable())
    }

    async fn find_by_any_skill(&self, _skills: &[String]) -> Result<Vec<Job>, AppError> {
        Err(unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(doc: Value) -> Job {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn test_has_any_skill() {
        let j = job(json!({"job_id": "a", "skills": ["Docker", "AWS"]}));
        assert!(has_any_skill(&j, &["Python".to_string(), "AWS".to_string()]));
        assert!(!has_any_skill(&j, &["Python".to_string()]));
        assert!(!has_any_skill(&j, &[]));
    }

    #[test]
    fn test_has_any_skill_irregular_shapes() {
        let wanted = ["Python".to_string()];
        assert!(has_any_skill(&job(json!({"skills": "Python"})), &wanted));
        assert!(has_any_skill(&job(json!({"skills": [3, "Python"]})), &wanted));
        assert!(!has_any_skill(&job(json!({"skills": {"Python": 1}})), &wanted));
        assert!(!has_any_skill(&job(json!({"job_id": "a"})), &wanted));
    }

    #[test]
    fn test_job_id_text() {
        assert_eq!(job_id_text(&job(json!({"job_id": "x"}))).as_deref(), Some("x"));
        assert_eq!(job_id_text(&job(json!({"job_id": 123}))).as_deref(), Some("123"));
        assert_eq!(job_id_text(&job(json!({"job_id": null}))), None);
        assert_eq!(job_id_text(&job(json!({}))), None);
    }
}
