//! Job Store: read-only queries over the `jobs` JSONB collection.
//!
//! `AppState` holds an `Arc<dyn JobStore>`; production uses `PgJobStore`.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::Job;

/// The query shapes the HTTP layer needs. Every method is a single pass-through
/// to the store with no business logic.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Every document, in store-native order.
    async fn list_all(&self) -> Result<Vec<Job>, AppError>;

    /// Up to `limit` documents starting at `offset`, in store-native order.
    async fn list_range(&self, offset: u64, limit: u64) -> Result<Vec<Job>, AppError>;

    async fn count(&self) -> Result<u64, AppError>;

    /// The document whose `job_id` equals `job_id`, if any.
    async fn find_by_job_id(&self, job_id: &str) -> Result<Option<Job>, AppError>;

    /// Documents whose `job_id` is one of `job_ids`.
    async fn find_by_job_ids(&self, job_ids: &[String]) -> Result<Vec<Job>, AppError>;

    /// Documents whose `skills` contain at least one of `skills`.
    async fn find_by_any_skill(&self, skills: &[String]) -> Result<Vec<Job>, AppError>;
}

/// PostgreSQL-backed store. Documents live in `jobs(id BIGSERIAL, doc JSONB)`;
/// `id` only provides the native ordering.
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn list_all(&self) -> Result<Vec<Job>, AppError> {
        let docs: Vec<Value> = sqlx::query_scalar("SELECT doc FROM jobs ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        decode_all(docs)
    }

    async fn list_range(&self, offset: u64, limit: u64) -> Result<Vec<Job>, AppError> {
        let docs: Vec<Value> =
            sqlx::query_scalar("SELECT doc FROM jobs ORDER BY id OFFSET $1 LIMIT $2")
                .bind(to_i64(offset)?)
                .bind(to_i64(limit)?)
                .fetch_all(&self.pool)
                .await?;
        decode_all(docs)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn find_by_job_id(&self, job_id: &str) -> Result<Option<Job>, AppError> {
        let doc: Option<Value> = sqlx::query_scalar(
            "SELECT doc FROM jobs WHERE doc->>'job_id' = $1 ORDER BY id LIMIT 1",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;
        doc.map(decode).transpose()
    }

    async fn find_by_job_ids(&self, job_ids: &[String]) -> Result<Vec<Job>, AppError> {
        let docs: Vec<Value> = sqlx::query_scalar(
            "SELECT doc FROM jobs WHERE doc->>'job_id' = ANY($1) ORDER BY id",
        )
        .bind(job_ids)
        .fetch_all(&self.pool)
        .await?;
        debug!("{} of {} requested job ids found", docs.len(), job_ids.len());
        decode_all(docs)
    }

    async fn find_by_any_skill(&self, skills: &[String]) -> Result<Vec<Job>, AppError> {
        // `?|` matches a string element of a `skills` array, or a bare string equal to one.
        let docs: Vec<Value> =
            sqlx::query_scalar("SELECT doc FROM jobs WHERE doc->'skills' ?| $1 ORDER BY id")
                .bind(skills)
                .fetch_all(&self.pool)
                .await?;
        decode_all(docs)
    }
}

fn decode(doc: Value) -> Result<Job, AppError> {
    serde_json::from_value(doc)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Malformed job document: {e}")))
}

fn decode_all(docs: Vec<Value>) -> Result<Vec<Job>, AppError> {
    docs.into_iter().map(decode).collect()
}

fn to_i64(value: u64) -> Result<i64, AppError> {
    i64::try_from(value)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Row offset {value} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_opaque_fields() {
        let job = decode(json!({"job_id": "x1", "company": "Acme"})).unwrap();
        assert_eq!(job.job_id.as_deref(), Some("x1"));
        assert_eq!(job.extra["company"], "Acme");
    }

    #[test]
    fn test_decode_tolerates_irregular_documents() {
        let docs = vec![
            json!({"job_id": 123, "skills": ["Rust"]}),
            json!({"job_id": "x2", "skills": "Python"}),
            json!({"job_id": "x3", "skills": [1, 2]}),
        ];
        let jobs = decode_all(docs.clone()).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].extra["job_id"], 123);
        assert_eq!(jobs[1].extra["skills"], "Python");
        for (job, doc) in jobs.iter().zip(&docs) {
            assert_eq!(&serde_json::to_value(job).unwrap(), doc);
        }
    }

    #[test]
    fn test_decode_rejects_non_object_document() {
        let err = decode(json!("just a string")).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_to_i64_bounds() {
        assert_eq!(to_i64(40).unwrap(), 40);
        assert!(to_i64(u64::MAX).is_err());
    }
}
