// Skill extraction: a fixed vocabulary matched against resume text.

pub mod matcher;
pub mod vocabulary;

pub use matcher::extract_skills;
pub use vocabulary::SkillVocabulary;
