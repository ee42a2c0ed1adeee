//! HttpGateway over a real reqwest client against a wiremock store.

mod common;

use common::sample_learnings_json;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skillbridge::adapters::ReqwestHttpClient;
use skillbridge::cli::render_summary;
use skillbridge::error::{GatewayError, ValidationError};
use skillbridge::gateway::{HttpGateway, LearningGateway};
use skillbridge::models::{NewAppliedSkill, NewLearning};
use skillbridge::stats::compute_stats;

const PREFIX: &str = "/server/SkillBridge";

fn gateway_for(server: &MockServer) -> HttpGateway<ReqwestHttpClient> {
    HttpGateway::new(ReqwestHttpClient::new(), format!("{}{}/", server.uri(), PREFIX))
}

#[tokio::test]
async fn test_list_learnings_decodes_store_payload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/api/learning", PREFIX)))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_learnings_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let learnings = gateway_for(&mock_server).list_learnings().await.unwrap();

    assert_eq!(learnings.len(), 3);
    assert_eq!(learnings[1].id, "2");
    assert_eq!(learnings[0].source, None);
    assert_eq!(learnings[1].source.as_deref(), Some("Workshop"));

    let stats = compute_stats(&learnings);
    assert_eq!((stats.total, stats.applied, stats.pending, stats.progress), (3, 1, 2, 33));
}

#[tokio::test]
async fn test_get_learning_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/api/learning/42", PREFIX)))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Learning not found"})),
        )
        .mount(&mock_server)
        .await;

    let err = gateway_for(&mock_server).get_learning("42").await.unwrap_err();

    assert_eq!(err, GatewayError::not_found("42"));
    assert_eq!(err.user_message("Failed to load learning."), "Learning not found");
}

#[tokio::test]
async fn test_get_learning_with_applied_skills() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/api/learning/7", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "learning": {"id": "7", "topic": "Tracing", "category": "Programming",
                         "source": "", "createdTime": "2024-02-01 10:00:00:000",
                         "appliedCount": 1, "status": "APPLIED"},
            "appliedSkills": [
                {"id": "s1", "type": "Project", "notes": "",
                 "applied_action": "Added spans", "createdTime": "2024-02-03 11:00:00:000"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let detail = gateway_for(&mock_server).get_learning("7").await.unwrap();

    assert_eq!(detail.learning.topic, "Tracing");
    assert_eq!(detail.applied_skills.len(), 1);
    assert_eq!(detail.applied_skills[0].kind, "Project");
    assert_eq!(detail.applied_skills[0].notes, None);
    assert_eq!(
        detail.applied_skills[0].applied_action.as_deref(),
        Some("Added spans")
    );
}

#[tokio::test]
async fn test_create_learning_posts_trimmed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/api/learning", PREFIX)))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"topic": "Iterators", "category": "Programming"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "9", "topic": "Iterators", "category": "Programming", "source": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = NewLearning::new("  Iterators ", "Programming").with_source("   ");
    let created = gateway_for(&mock_server).create_learning(&request).await.unwrap();

    assert_eq!(created.id, "9");
    assert_eq!(created.applied_count, 0);
}

#[tokio::test]
async fn test_create_applied_skill_server_error_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/api/learning/3/applied", PREFIX)))
        .and(body_json(json!({"type": "Practice", "notes": "Kata"})))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "Failed to create applied skill"})),
        )
        .mount(&mock_server)
        .await;

    let request = NewAppliedSkill::new("Practice").with_notes("Kata");
    let err = gateway_for(&mock_server)
        .create_applied_skill("3", &request)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GatewayError::fetch(Some(500), Some("Failed to create applied skill".into()))
    );
}

#[tokio::test]
async fn test_invalid_create_sends_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let err = gateway
        .create_learning(&NewLearning::new("", "Design"))
        .await
        .unwrap_err();
    assert_eq!(err, GatewayError::Validation(ValidationError::MissingTopic));

    let err = gateway
        .create_applied_skill("3", &NewAppliedSkill::new(" "))
        .await
        .unwrap_err();
    assert_eq!(err, GatewayError::Validation(ValidationError::MissingType));
}

#[tokio::test]
async fn test_summary_from_live_store() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/api/learning", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_learnings_json()))
        .mount(&mock_server)
        .await;

    let learnings = gateway_for(&mock_server).list_learnings().await.unwrap();
    let summary = render_summary(&learnings);

    assert!(summary.contains("33%"));
    let grid = summary.find("Grid systems").unwrap();
    let pattern = summary.find("Pattern matching").unwrap();
    assert!(grid < pattern, "oldest pending learning comes first");
    assert!(!summary.contains("Active listening"));
}

#[tokio::test]
async fn test_unreachable_store_is_fetch_error() {
    let gateway = HttpGateway::new(ReqwestHttpClient::new(), "http://127.0.0.1:59998");
    let err = gateway.list_learnings().await.unwrap_err();
    assert!(matches!(err, GatewayError::Fetch { status: None, .. }));
}
