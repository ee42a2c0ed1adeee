use serde::Serialize;

use crate::error::ValidationError;

/// Payload for creating a learning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewLearning {
    pub topic: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl NewLearning {
    pub fn new(topic: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            category: category.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Trim every field and check the required ones.
    ///
    /// Returns the payload that should go on the wire: an optional field that
    /// is blank after trimming is dropped.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(Self {
            topic: topic.to_string(),
            category: category.to_string(),
            source: trimmed_non_empty(self.source.as_deref()),
        })
    }
}

/// Payload for recording an applied skill against a learning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewAppliedSkill {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_action: Option<String>,
}

impl NewAppliedSkill {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            notes: None,
            applied_action: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_applied_action(mut self, action: impl Into<String>) -> Self {
        self.applied_action = Some(action.into());
        self
    }

    /// Trim every field and check that `kind` is present.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        let kind = self.kind.trim();
        if kind.is_empty() {
            return Err(ValidationError::MissingType);
        }
        Ok(Self {
            kind: kind.to_string(),
            notes: trimmed_non_empty(self.notes.as_deref()),
            applied_action: trimmed_non_empty(self.applied_action.as_deref()),
        })
    }
}

fn trimmed_non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
