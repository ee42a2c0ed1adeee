//! Common test utilities for integration tests.
//!
//! Fixtures shared by the integration tests: a small learning collection,
//! an app wired to a [`MockGateway`], and helpers to drive it by key.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockGateway::new();
//! gateway.set_learnings(sample_learnings());
//! let mut app = test_app(&gateway);
//! press(&mut app, KeyCode::Char('l'));
//! app.settle().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};

use skillbridge::adapters::MockGateway;
use skillbridge::app::App;
use skillbridge::config::ClientConfig;
use skillbridge::models::{AppliedSkill, Learning, LearningDetail};

/// Three learnings: two pending (created Jan 2 and Jan 1), one applied.
pub fn sample_learnings() -> Vec<Learning> {
    vec![
        Learning::new("1", "Pattern matching", "Programming").with_created_time("2024-01-02"),
        Learning::new("2", "Active listening", "Communication")
            .with_created_time("2024-01-01")
            .with_applied_count(2),
        Learning::new("3", "Grid systems", "Design").with_created_time("2024-01-01"),
    ]
}

pub fn sample_detail(id: &str) -> LearningDetail {
    LearningDetail {
        learning: Learning::new(id, "Active listening", "Communication").with_applied_count(1),
        applied_skills: vec![AppliedSkill::new("Work Task")
            .with_applied_action("Paraphrased requirements back in planning")],
    }
}

/// The same collection as the store sends it.
pub fn sample_learnings_json() -> Value {
    json!([
        {"id": "1", "topic": "Pattern matching", "category": "Programming", "source": "",
         "createdTime": "2024-01-02 09:00:00:000", "appliedCount": 0, "status": "NOT_STARTED"},
        {"id": 2, "topic": "Active listening", "category": "Communication", "source": "Workshop",
         "createdTime": "2024-01-01 08:00:00:000", "appliedCount": 2, "status": "APPLIED"},
        {"id": "3", "topic": "Grid systems", "category": "Design", "source": "",
         "createdTime": "2024-01-01 07:00:00:000", "appliedCount": 0, "status": "NOT_STARTED"}
    ])
}

/// An app on the dashboard backed by `gateway`; nothing fetched yet.
pub fn test_app(gateway: &MockGateway) -> App {
    App::new(Arc::new(gateway.clone()), ClientConfig::default())
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
