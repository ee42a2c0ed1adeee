//! Mock learning gateway for testing.
//!
//! Records every call and returns scripted results, so app-level flows can
//! be tested without any HTTP layer at all.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::LearningGateway;
use crate::models::{AppliedSkill, Learning, LearningDetail, NewAppliedSkill, NewLearning};

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ListLearnings,
    GetLearning(String),
    CreateLearning(NewLearning),
    CreateAppliedSkill(String, NewAppliedSkill),
}

/// Mock implementation of [`LearningGateway`].
///
/// Unscripted calls behave like an empty store: the list is empty, every
/// detail is not found, and creates echo the request back with a generated id.
/// Requests are NOT validated here, so tests can see exactly what reached it.
///
/// # Example
///
/// ```ignore
/// let gateway = MockGateway::new();
/// gateway.set_learnings(vec![Learning::new("1", "Traits", "Programming")]);
/// let app = App::new(Arc::new(gateway.clone()), config);
/// // ...
/// assert_eq!(gateway.list_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    list_result: Arc<Mutex<Option<GatewayResult<Vec<Learning>>>>>,
    detail_results: Arc<Mutex<HashMap<String, GatewayResult<LearningDetail>>>>,
    create_learning_result: Arc<Mutex<Option<GatewayResult<Learning>>>>,
    create_applied_result: Arc<Mutex<Option<GatewayResult<AppliedSkill>>>>,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful list response.
    pub fn set_learnings(&self, learnings: Vec<Learning>) {
        *self.list_result.lock().unwrap() = Some(Ok(learnings));
    }

    /// Make every list call fail.
    pub fn fail_list(&self, err: GatewayError) {
        *self.list_result.lock().unwrap() = Some(Err(err));
    }

    /// Script a successful detail response, keyed by the learning's id.
    pub fn set_detail(&self, detail: LearningDetail) {
        let id = detail.learning.id.clone();
        self.detail_results.lock().unwrap().insert(id, Ok(detail));
    }

    /// Make detail calls for `id` fail.
    pub fn fail_detail(&self, id: &str, err: GatewayError) {
        self.detail_results
            .lock()
            .unwrap()
            .insert(id.to_string(), Err(err));
    }

    pub fn set_create_learning_result(&self, result: GatewayResult<Learning>) {
        *self.create_learning_result.lock().unwrap() = Some(result);
    }

    pub fn set_create_applied_result(&self, result: GatewayResult<AppliedSkill>) {
        *self.create_applied_result.lock().unwrap() = Some(result);
    }

    /// All calls in the order they were made.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn list_count(&self) -> usize {
        self.count(|call| matches!(call, GatewayCall::ListLearnings))
    }

    /// Ids passed to `get_learning`, in call order.
    pub fn detail_requests(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::GetLearning(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of create calls of either kind.
    pub fn create_count(&self) -> usize {
        self.count(|call| {
            matches!(
                call,
                GatewayCall::CreateLearning(_) | GatewayCall::CreateAppliedSkill(..)
            )
        })
    }

    fn count(&self, predicate: impl Fn(&GatewayCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: GatewayCall) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }
}

#[async_trait]
impl LearningGateway for MockGateway {
    async fn list_learnings(&self) -> GatewayResult<Vec<Learning>> {
        self.record(GatewayCall::ListLearnings);
        self.list_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_learning(&self, id: &str) -> GatewayResult<LearningDetail> {
        self.record(GatewayCall::GetLearning(id.to_string()));
        self.detail_results
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(GatewayError::not_found(id)))
    }

    async fn create_learning(&self, request: &NewLearning) -> GatewayResult<Learning> {
        let n = self.record(GatewayCall::CreateLearning(request.clone()));
        if let Some(result) = self.create_learning_result.lock().unwrap().clone() {
            return result;
        }
        let mut learning = Learning::new(format!("mock-{}", n), &request.topic, &request.category);
        learning.source = request.source.clone();
        Ok(learning)
    }

    async fn create_applied_skill(
        &self,
        learning_id: &str,
        request: &NewAppliedSkill,
    ) -> GatewayResult<AppliedSkill> {
        let n = self.record(GatewayCall::CreateAppliedSkill(
            learning_id.to_string(),
            request.clone(),
        ));
        if let Some(result) = self.create_applied_result.lock().unwrap().clone() {
            return result;
        }
        Ok(AppliedSkill {
            id: Some(format!("mock-{}", n)),
            kind: request.kind.clone(),
            applied_action: request.applied_action.clone(),
            notes: request.notes.clone(),
            created_time: None,
        })
    }
}
