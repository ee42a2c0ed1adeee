use crate::models::{AppliedSkill, Learning, LearningDetail};

/// The selected learning and its applied skills.
///
/// Empty when the last detail snapshot belongs to a different learning than
/// the one selected, e.g. after a failed fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailViewModel<'a> {
    pub learning: Option<&'a Learning>,
    pub applied_skills: &'a [AppliedSkill],
}

impl<'a> DetailViewModel<'a> {
    pub fn new(selected_id: &str, snapshot: Option<&'a LearningDetail>) -> Self {
        match snapshot {
            Some(detail) if detail.learning.id == selected_id => Self {
                learning: Some(&detail.learning),
                applied_skills: &detail.applied_skills,
            },
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.learning.is_none()
    }
}
