//! AppMessage enum for async communication within the application.

use crate::error::GatewayError;
use crate::models::{AppliedSkill, Learning, LearningDetail};

/// Results of gateway calls, sent back from spawned tasks.
///
/// Each spawned operation sends exactly one message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The whole collection was fetched
    LearningsLoaded(Vec<Learning>),
    /// Fetching the collection failed
    LearningsLoadFailed(GatewayError),
    /// One learning and its applied skills were fetched
    DetailLoaded(LearningDetail),
    /// Fetching a learning failed
    DetailLoadFailed { learning_id: String, error: GatewayError },
    /// The store accepted a new learning; `form` is the submitting form's generation
    LearningCreated { form: u64, learning: Learning },
    LearningCreateFailed { form: u64, error: GatewayError },
    /// The store accepted a new applied skill
    AppliedSkillCreated {
        form: u64,
        learning_id: String,
        skill: AppliedSkill,
    },
    AppliedSkillCreateFailed {
        form: u64,
        learning_id: String,
        error: GatewayError,
    },
}
