use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job posting as stored in the `jobs.doc` JSONB column.
///
/// Only `job_id` and `skills` are interpreted; every other field is carried
/// through untouched so responses echo the stored document. A `job_id` that
/// is not a string, or `skills` that is not an array of strings, stays in
/// `extra` as-is instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Job {
    fn from(mut extra: Map<String, Value>) -> Self {
        let job_id = match extra.remove("job_id") {
            Some(Value::String(id)) => Some(id),
            Some(other) => {
                extra.insert("job_id".to_string(), other);
                None
            }
            None => None,
        };

        let skills = match extra.remove("skills") {
            Some(value) => match string_array(&value) {
                Some(skills) => Some(skills),
                None => {
                    extra.insert("skills".to_string(), value);
                    None
                }
            },
            None => None,
        };

        Job {
            job_id,
            skills,
            extra,
        }
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(String::from))
        .collect()
}
