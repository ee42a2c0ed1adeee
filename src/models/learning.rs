use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_empty_as_none, deserialize_id, deserialize_optional_id};

/// Whether a learning has been put into practice yet.
///
/// Always derived from [`Learning::applied_count`]. The store also sends a
/// `status` string, but it is never read so the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningStatus {
    /// At least one applied skill exists
    Applied,
    /// No applied skills yet (pending)
    NotStarted,
}

impl LearningStatus {
    /// Derive the status from an applied-skill count
    pub fn from_applied_count(applied_count: u32) -> Self {
        if applied_count > 0 {
            LearningStatus::Applied
        } else {
            LearningStatus::NotStarted
        }
    }

    /// Label shown in badges
    pub fn label(&self) -> &'static str {
        match self {
            LearningStatus::Applied => "APPLIED",
            LearningStatus::NotStarted => "NOT_STARTED",
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, LearningStatus::Applied)
    }
}

impl fmt::Display for LearningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A topic the user is studying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learning {
    /// Store-assigned identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub topic: String,
    pub category: String,
    /// Where the learning came from (book, course, colleague...)
    #[serde(
        default,
        deserialize_with = "deserialize_empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
    /// ISO-8601-ish timestamp; lexically sortable
    #[serde(
        default,
        deserialize_with = "deserialize_empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
    /// Number of applied skills, maintained by the store
    #[serde(default)]
    pub applied_count: u32,
}

impl Learning {
    /// Create a learning with no applied skills.
    pub fn new(id: impl Into<String>, topic: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            category: category.into(),
            source: None,
            created_time: None,
            applied_count: 0,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_created_time(mut self, created_time: impl Into<String>) -> Self {
        self.created_time = Some(created_time.into());
        self
    }

    pub fn with_applied_count(mut self, applied_count: u32) -> Self {
        self.applied_count = applied_count;
        self
    }

    /// Derived status; `applied_count == 0` is the only definition of pending.
    pub fn status(&self) -> LearningStatus {
        LearningStatus::from_applied_count(self.applied_count)
    }

    pub fn is_pending(&self) -> bool {
        self.applied_count == 0
    }

    /// Sort key for oldest-first ordering; a missing timestamp sorts first.
    pub fn created_sort_key(&self) -> &str {
        self.created_time.as_deref().unwrap_or("")
    }
}

/// A record of a learning being used in practice.
///
/// Owned by its parent learning and only fetched as part of a detail request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedSkill {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Skill application category
    #[serde(rename = "type")]
    pub kind: String,
    /// What was done
    #[serde(
        default,
        deserialize_with = "deserialize_empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub applied_action: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(
        rename = "createdTime",
        default,
        deserialize_with = "deserialize_empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
}

impl AppliedSkill {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            applied_action: None,
            notes: None,
            created_time: None,
        }
    }

    pub fn with_applied_action(mut self, action: impl Into<String>) -> Self {
        self.applied_action = Some(action.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_created_time(mut self, created_time: impl Into<String>) -> Self {
        self.created_time = Some(created_time.into());
        self
    }
}

/// Response of a single-learning fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningDetail {
    pub learning: Learning,
    #[serde(default)]
    pub applied_skills: Vec<AppliedSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derived_from_count() {
        assert_eq!(LearningStatus::from_applied_count(0), LearningStatus::NotStarted);
        assert_eq!(LearningStatus::from_applied_count(1), LearningStatus::Applied);
        assert_eq!(LearningStatus::from_applied_count(17), LearningStatus::Applied);
        assert_eq!(LearningStatus::Applied.label(), "APPLIED");
        assert_eq!(LearningStatus::NotStarted.to_string(), "NOT_STARTED");
    }

    #[test]
    fn test_deserialize_store_learning() {
        let json = r#"{
            "id": "3000000012345",
            "topic": "Ownership in Rust",
            "category": "Programming",
            "source": "",
            "createdTime": "2024-01-02 10:11:12:123",
            "appliedCount": 2,
            "status": "APPLIED"
        }"#;
        let learning: Learning = serde_json::from_str(json).unwrap();
        assert_eq!(learning.id, "3000000012345");
        assert_eq!(learning.topic, "Ownership in Rust");
        assert_eq!(learning.source, None);
        assert_eq!(learning.created_time.as_deref(), Some("2024-01-02 10:11:12:123"));
        assert_eq!(learning.applied_count, 2);
        assert_eq!(learning.status(), LearningStatus::Applied);
    }

    #[test]
    fn test_store_status_is_ignored() {
        // The store says PENDING but the count says otherwise; the count wins.
        let json = r#"{"id":1,"topic":"t","category":"c","appliedCount":1,"status":"PENDING"}"#;
        let learning: Learning = serde_json::from_str(json).unwrap();
        assert_eq!(learning.status(), LearningStatus::Applied);
        assert!(!learning.is_pending());
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"id":"7","topic":"t","category":"c"}"#;
        let learning: Learning = serde_json::from_str(json).unwrap();
        assert_eq!(learning.applied_count, 0);
        assert!(learning.is_pending());
        assert_eq!(learning.created_sort_key(), "");
    }

    #[test]
    fn test_deserialize_applied_skill() {
        let json = r#"{
            "id": "99",
            "type": "Project",
            "notes": "",
            "applied_action": "Refactored the parser",
            "createdTime": "2024-02-01 08:00:00:000"
        }"#;
        let skill: AppliedSkill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.id.as_deref(), Some("99"));
        assert_eq!(skill.kind, "Project");
        assert_eq!(skill.notes, None);
        assert_eq!(skill.applied_action.as_deref(), Some("Refactored the parser"));
    }

    #[test]
    fn test_deserialize_detail_without_skills_key() {
        let json = r#"{"learning":{"id":"1","topic":"t","category":"c","appliedCount":0}}"#;
        let detail: LearningDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.learning.id, "1");
        assert!(detail.applied_skills.is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let learning = Learning::new("1", "t", "c");
        let value = serde_json::to_value(&learning).unwrap();
        assert!(value.get("source").is_none());
        assert!(value.get("createdTime").is_none());
        assert_eq!(value["appliedCount"], 0);
    }
}
