use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Skills recognised when no `SKILLS_FILE` is configured.
const BUILTIN_SKILLS: &[&str] = &[
    // Languages
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "C++",
    "C#",
    "Golang",
    "Rust",
    "Ruby",
    "PHP",
    "Kotlin",
    "Swift",
    "Scala",
    "SQL",
    "HTML",
    "CSS",
    // Frameworks and libraries
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Ruby on Rails",
    ".NET",
    "Tailwind",
    "Redux",
    "GraphQL",
    // Data
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "Spark",
    "Hadoop",
    "Pandas",
    "NumPy",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "Power BI",
    "Tableau",
    "Excel",
    // Infrastructure
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Jenkins",
    "CI/CD",
    "Linux",
    "Git",
    "REST API",
    "Microservices",
    // Practice
    "Agile",
    "Scrum",
    "Figma",
    "Selenium",
    "Jira",
];

/// The ordered skill list matched against uploaded resumes.
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_SKILLS.iter().map(|s| s.to_string()).collect())
    }

    /// Reads a JSON array of strings. Order and duplicates are kept as written.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file {}", path.display()))?;
        let skills: Vec<String> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "Skills file {} must be a JSON array of strings",
                path.display()
            )
        })?;
        Ok(Self::new(skills))
    }

    /// Uses `path` when given, otherwise the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let vocabulary = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::builtin(),
        };
        if vocabulary.is_empty() {
            warn!("Skill vocabulary is empty; every resume upload will report no matching jobs");
        }
        info!(
            "Skill vocabulary loaded: {} entries ({})",
            vocabulary.len(),
            path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
        );
        Ok(vocabulary)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
