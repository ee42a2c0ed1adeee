//! Message and key handling for the App.

use crossterm::event::KeyEvent;

use super::{App, AppMessage};
use crate::input::{Command, InputContext, ModalType, ScreenKind};
use crate::state::NavEvent;

impl App {
    /// Apply the result of a spawned gateway call.
    ///
    /// Results are applied in arrival order; the latest one wins.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.mark_dirty();

        match msg {
            AppMessage::LearningsLoaded(learnings) => {
                tracing::info!("Loaded {} learnings", learnings.len());
                self.learnings = learnings;
                self.clamp_selection();
            }
            AppMessage::LearningsLoadFailed(error) => {
                tracing::warn!(category = %error.category(), "Failed to load learnings: {}", error);
                self.learnings.clear();
                self.clamp_selection();
                self.toasts
                    .error(error.user_message("Failed to load learnings."));
            }
            AppMessage::DetailLoaded(detail) => {
                tracing::info!(
                    "Loaded learning {} with {} applied skills",
                    detail.learning.id,
                    detail.applied_skills.len()
                );
                self.detail = Some(detail);
            }
            AppMessage::DetailLoadFailed { learning_id, error } => {
                tracing::warn!(category = %error.category(), "Failed to load learning {}: {}", learning_id, error);
                self.toasts.error(error.user_message("Failed to load learning."));
            }
            AppMessage::LearningCreated { form, learning } => {
                tracing::info!("Created learning {}", learning.id);
                self.submitting = false;
                self.close_submitted_modal(form);
                self.toasts.info("Learning added.");
                let _ = self.dispatch(NavEvent::LearningAdded);
            }
            AppMessage::LearningCreateFailed { error, .. } => {
                tracing::warn!(category = %error.category(), "Failed to create learning: {}", error);
                self.submitting = false;
                self.toasts.error(error.user_message("Failed to add learning."));
            }
            AppMessage::AppliedSkillCreated {
                form,
                learning_id,
                skill,
            } => {
                tracing::info!("Created applied skill {:?} for {}", skill.id, learning_id);
                self.submitting = false;
                self.close_submitted_modal(form);
                self.toasts.info("Applied skill added.");
                // The user may have navigated away while the call was in flight
                if self.nav.selected_id() == Some(learning_id.as_str()) {
                    let _ = self.dispatch(NavEvent::AppliedSkillAdded);
                }
            }
            AppMessage::AppliedSkillCreateFailed {
                learning_id, error, ..
            } => {
                tracing::warn!(
                    category = %error.category(),
                    "Failed to create applied skill for {}: {}",
                    learning_id,
                    error
                );
                self.submitting = false;
                self.toasts
                    .error(error.user_message("Failed to add applied skill."));
            }
        }
    }

    /// Current input context for the command registry.
    pub fn input_context(&self) -> InputContext {
        InputContext::new()
            .with_screen(ScreenKind::from(self.screen()))
            .with_modal(ModalType::from(self.modal.as_ref()))
    }

    /// Translate a key press into a command and run it.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let context = self.input_context();
        if let Some(cmd) = self.command_registry.dispatch(key, &context) {
            self.execute_command(cmd);
        }
    }

    /// Run a command against the app.
    pub fn execute_command(&mut self, cmd: Command) {
        tracing::debug!("Executing {:?}", cmd);
        match cmd {
            Command::Quit => self.quit(),
            Command::Reload => self.reload(),
            Command::NavigateToDashboard => self.navigate_to_dashboard(),
            Command::NavigateToList => self.navigate_to_list(),
            Command::Back => self.back(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::OpenSelected => self.open_selected(),
            Command::OpenAddLearning => self.open_add_learning(),
            Command::OpenAddAppliedSkill => self.open_add_applied_skill(),
            Command::SubmitModal => self.submit_modal(),
            Command::CancelModal => self.cancel_modal(),
            edit => self.edit_modal(edit),
        }
    }

    fn edit_modal(&mut self, cmd: Command) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match cmd {
            Command::InsertChar(c) => modal.insert_char(c),
            Command::Backspace => modal.backspace(),
            Command::FocusNextField => modal.focus_next(),
            Command::FocusPrevField => modal.focus_prev(),
            Command::NextOption => modal.next_option(),
            Command::PrevOption => modal.prev_option(),
            _ => return,
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::adapters::MockGateway;
    use crate::config::ClientConfig;
    use crate::error::GatewayError;
    use crate::models::{AppliedSkill, Learning, LearningDetail};
    use crate::state::{Modal, Screen};

    fn app_with(gateway: &MockGateway) -> App {
        App::new(Arc::new(gateway.clone()), ClientConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_list_failure_clears_learnings_and_toasts() {
        let gateway = MockGateway::new();
        gateway.set_learnings(vec![Learning::new("1", "Traits", "Programming")]);
        let mut app = app_with(&gateway);
        app.start();
        app.settle().await;
        assert_eq!(app.learnings.len(), 1);

        gateway.fail_list(GatewayError::fetch(Some(500), Some("Failed to fetch learnings".into())));
        app.reload();
        app.settle().await;

        assert!(app.learnings.is_empty());
        let toast = app.toasts.current().unwrap();
        assert!(toast.is_error());
        assert_eq!(toast.message, "Failed to fetch learnings");
    }

    #[tokio::test]
    async fn test_detail_failure_keeps_snapshot() {
        let gateway = MockGateway::new();
        let detail = LearningDetail {
            learning: Learning::new("1", "Traits", "Programming"),
            applied_skills: vec![AppliedSkill::new("Project")],
        };
        gateway.set_detail(detail.clone());
        let mut app = app_with(&gateway);

        app.open_detail("1");
        app.settle().await;
        assert_eq!(app.detail.as_ref(), Some(&detail));

        gateway.fail_detail("1", GatewayError::transport("connection refused"));
        app.reload();
        app.settle().await;

        assert_eq!(app.detail.as_ref(), Some(&detail));
        assert!(app.toasts.current().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_unknown_detail_shows_not_found() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);

        app.open_detail("missing");
        app.settle().await;

        assert_eq!(app.toasts.current().unwrap().message, "Learning not found");
    }

    #[tokio::test]
    async fn test_add_learning_by_keyboard() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);
        app.start();
        app.settle().await;

        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.modal, Some(Modal::AddLearning(_))));

        type_text(&mut app, "Lifetimes");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.submitting);
        app.settle().await;

        assert!(app.modal.is_none());
        assert!(!app.submitting);
        assert_eq!(app.toasts.current().unwrap().message, "Learning added.");
        // Initial load plus the reload after the create
        assert_eq!(gateway.list_count(), 2);
        assert_eq!(gateway.create_count(), 1);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_form_open() {
        let gateway = MockGateway::new();
        gateway.set_create_learning_result(Err(GatewayError::fetch(Some(500), None)));
        let mut app = app_with(&gateway);

        app.open_add_learning();
        type_text(&mut app, "Lifetimes");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        app.settle().await;

        assert!(app.modal.is_some());
        assert!(!app.submitting);
        assert_eq!(app.toasts.current().unwrap().message, "Failed to add learning.");
        assert_eq!(gateway.list_count(), 0);
    }

    fn fill_learning_form(app: &mut App, topic: &str) {
        app.open_add_learning();
        type_text(app, topic);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
    }

    #[tokio::test]
    async fn test_abandoned_create_leaves_newer_form_open() {
        let gateway = MockGateway::new();
        gateway.set_detail(LearningDetail {
            learning: Learning::new("9", "Retros", "Leadership"),
            applied_skills: Vec::new(),
        });
        let mut app = app_with(&gateway);

        fill_learning_form(&mut app, "Lifetimes");
        press(&mut app, KeyCode::Enter);
        app.cancel_modal();
        assert!(app.submitting);

        app.dispatch(NavEvent::OpenDetail("9".into())).unwrap();
        app.open_add_applied_skill();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "x");
        app.settle().await;

        assert!(!app.submitting);
        assert_eq!(gateway.create_count(), 1);
        match &app.modal {
            Some(Modal::AddAppliedSkill(form)) => {
                assert_eq!(form.learning_id, "9");
                assert_eq!(form.applied_action, "x");
            }
            other => panic!("expected applied skill form, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancel_does_not_allow_duplicate_submit() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);

        fill_learning_form(&mut app, "Lifetimes");
        press(&mut app, KeyCode::Enter);
        app.cancel_modal();
        fill_learning_form(&mut app, "Lifetimes");
        press(&mut app, KeyCode::Enter);
        app.settle().await;

        assert_eq!(gateway.create_count(), 1);
        // The reopened form was never submitted, so it stays
        match &app.modal {
            Some(Modal::AddLearning(form)) => assert_eq!(form.topic, "Lifetimes"),
            other => panic!("expected learning form, got {:?}", other),
        }

        press(&mut app, KeyCode::Enter);
        app.settle().await;
        assert_eq!(gateway.create_count(), 2);
        assert!(app.modal.is_none());
    }

    #[tokio::test]
    async fn test_applied_skill_reloads_detail() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);
        app.open_detail("7");
        app.settle().await;

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        app.settle().await;

        assert_eq!(app.toasts.current().unwrap().message, "Applied skill added.");
        assert_eq!(gateway.detail_requests(), vec!["7".to_string(), "7".to_string()]);
        assert_eq!(gateway.list_count(), 0);
    }

    #[tokio::test]
    async fn test_applied_skill_after_leaving_detail_does_not_reload() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);
        app.open_detail("7");
        app.settle().await;

        app.handle_message(AppMessage::AppliedSkillCreated {
            form: 0,
            learning_id: "3".into(),
            skill: AppliedSkill::new("Project"),
        });

        assert_eq!(app.in_flight, 0);
        assert_eq!(gateway.detail_requests(), vec!["7".to_string()]);
    }

    #[tokio::test]
    async fn test_keys_navigate_between_screens() {
        let gateway = MockGateway::new();
        gateway.set_learnings(vec![Learning::new("1", "Traits", "Programming")]);
        let mut app = app_with(&gateway);

        press(&mut app, KeyCode::Char('l'));
        app.settle().await;
        assert_eq!(app.screen(), &Screen::List);

        press(&mut app, KeyCode::Enter);
        app.settle().await;
        assert_eq!(app.screen().selected_id(), Some("1"));

        press(&mut app, KeyCode::Esc);
        app.settle().await;
        assert_eq!(app.screen(), &Screen::List);

        press(&mut app, KeyCode::Char('d'));
        app.settle().await;
        assert_eq!(app.screen(), &Screen::Dashboard);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_inside_form_is_text() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);
        app.open_add_learning();

        press(&mut app, KeyCode::Char('q'));

        assert!(!app.should_quit);
        match &app.modal {
            Some(Modal::AddLearning(form)) => assert_eq!(form.topic, "q"),
            other => panic!("expected learning form, got {:?}", other),
        }
    }

    #[test]
    fn test_ctrl_c_quits_inside_form() {
        let gateway = MockGateway::new();
        let mut app = app_with(&gateway);
        app.open_add_learning();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
