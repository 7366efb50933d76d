//! Skill Matcher: plain substring containment of vocabulary entries in text.

use crate::skills::vocabulary::SkillVocabulary;

/// Returns every vocabulary entry that occurs in `text`, in vocabulary order.
///
/// Matching is case-sensitive and literal: "Java" also matches inside
/// "JavaScript", and duplicated vocabulary entries are reported twice.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect()
}
