//! User-initiated create actions: opening, submitting and cancelling modals.

use std::sync::Arc;

use super::{App, AppMessage};
use crate::models::{NewAppliedSkill, NewLearning};
use crate::state::{AppliedSkillForm, LearningForm, Modal, Screen};

/// A validated create request, detached from the form it came from.
enum Submission {
    Learning(NewLearning),
    AppliedSkill(String, NewAppliedSkill),
}

impl App {
    /// Open the "add learning" form (Dashboard / List only).
    pub fn open_add_learning(&mut self) {
        if matches!(self.screen(), Screen::Dashboard | Screen::List) {
            let form = LearningForm::new(self.config.categories.clone());
            self.show_modal(Modal::AddLearning(form));
        }
    }

    /// Open the "add applied skill" form for the selected learning.
    pub fn open_add_applied_skill(&mut self) {
        if let Some(id) = self.nav.selected_id() {
            let form = AppliedSkillForm::new(id, self.config.skill_types.clone());
            self.show_modal(Modal::AddAppliedSkill(form));
        }
    }

    /// Close the form. An outstanding create keeps running and still
    /// blocks new submissions until it reports back.
    pub fn cancel_modal(&mut self) {
        if self.modal.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Close the form a create result belongs to, if it is still open.
    pub(super) fn close_submitted_modal(&mut self, form: u64) {
        if self.modal.is_some() && self.modal_generation == form {
            self.modal = None;
        }
    }

    fn show_modal(&mut self, modal: Modal) {
        self.modal_generation += 1;
        self.modal = Some(modal);
        self.mark_dirty();
    }

    /// Validate the open form and spawn the create call.
    ///
    /// Invalid input shows an error toast and never reaches the gateway.
    pub fn submit_modal(&mut self) {
        if self.submitting {
            return;
        }
        let submission = match self.modal.as_ref() {
            None => return,
            Some(Modal::AddLearning(form)) => form.to_request().map(Submission::Learning),
            Some(Modal::AddAppliedSkill(form)) => form
                .to_request()
                .map(|request| Submission::AppliedSkill(form.learning_id.clone(), request)),
        };
        self.mark_dirty();

        let submission = match submission {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!("Submission rejected: {}", e);
                self.toasts.error(e.user_message());
                return;
            }
        };

        let gateway = Arc::clone(&self.gateway);
        let message_tx = self.message_tx.clone();
        let form = self.modal_generation;
        self.begin_submit();

        match submission {
            Submission::Learning(request) => {
                tokio::spawn(async move {
                    let msg = match gateway.create_learning(&request).await {
                        Ok(learning) => AppMessage::LearningCreated { form, learning },
                        Err(error) => AppMessage::LearningCreateFailed { form, error },
                    };
                    let _ = message_tx.send(msg);
                });
            }
            Submission::AppliedSkill(learning_id, request) => {
                tokio::spawn(async move {
                    let msg = match gateway.create_applied_skill(&learning_id, &request).await {
                        Ok(skill) => AppMessage::AppliedSkillCreated {
                            form,
                            learning_id,
                            skill,
                        },
                        Err(error) => AppMessage::AppliedSkillCreateFailed {
                            form,
                            learning_id,
                            error,
                        },
                    };
                    let _ = message_tx.send(msg);
                });
            }
        }
    }

    fn begin_submit(&mut self) {
        self.submitting = true;
        self.in_flight += 1;
    }
}
