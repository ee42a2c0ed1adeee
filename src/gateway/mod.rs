//! Data gateway: the boundary between the app and the learning store.
//!
//! [`LearningGateway`] is the only way the rest of the crate reads or writes
//! learnings. The production implementation is [`HttpGateway`], which speaks
//! the store's REST contract over any [`HttpClient`](crate::traits::HttpClient).
//! Tests substitute [`MockGateway`](crate::adapters::mock::MockGateway).

mod http;

pub use http::HttpGateway;

use async_trait::async_trait;

use crate::error::GatewayResult;
use crate::models::{AppliedSkill, Learning, LearningDetail, NewAppliedSkill, NewLearning};

/// Async CRUD surface of the learning store.
///
/// Every call is independent: no caching, no retries, no de-duplication.
#[async_trait]
pub trait LearningGateway: Send + Sync {
    /// Fetch the whole collection.
    async fn list_learnings(&self) -> GatewayResult<Vec<Learning>>;

    /// Fetch one learning together with its applied skills.
    async fn get_learning(&self, id: &str) -> GatewayResult<LearningDetail>;

    /// Create a learning. `topic` and `category` must be non-blank.
    async fn create_learning(&self, request: &NewLearning) -> GatewayResult<Learning>;

    /// Record an applied skill against `learning_id`. `kind` must be non-blank.
    async fn create_applied_skill(
        &self,
        learning_id: &str,
        request: &NewAppliedSkill,
    ) -> GatewayResult<AppliedSkill>;
}
