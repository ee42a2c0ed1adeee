//! Modal form state for the two create actions.
//!
//! Forms hold raw user input only. Turning them into request payloads goes
//! through [`NewLearning::validated`] / [`NewAppliedSkill::validated`], so the
//! same rules apply here as at the gateway.

use crate::error::ValidationError;
use crate::models::{NewAppliedSkill, NewLearning};

/// A choice among fixed options. Starts with nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionField {
    options: Vec<String>,
    selected: Option<usize>,
}

impl OptionField {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selected option, or `""` when nothing is selected yet.
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

/// Fields of the "add learning" form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LearningField {
    #[default]
    Topic,
    Category,
    Source,
}

impl LearningField {
    fn next(self) -> Self {
        match self {
            Self::Topic => Self::Category,
            Self::Category => Self::Source,
            Self::Source => Self::Topic,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Topic => Self::Source,
            Self::Category => Self::Topic,
            Self::Source => Self::Category,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LearningForm {
    pub topic: String,
    pub category: OptionField,
    pub source: String,
    pub focus: LearningField,
}

impl LearningForm {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            category: OptionField::new(categories),
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            LearningField::Topic => self.topic.push(c),
            LearningField::Source => self.source.push(c),
            LearningField::Category => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LearningField::Topic => {
                self.topic.pop();
            }
            LearningField::Source => {
                self.source.pop();
            }
            LearningField::Category => {}
        }
    }

    pub fn next_option(&mut self) {
        if self.focus == LearningField::Category {
            self.category.next();
        }
    }

    pub fn prev_option(&mut self) {
        if self.focus == LearningField::Category {
            self.category.prev();
        }
    }

    /// Build the create payload, or the first missing required field.
    pub fn to_request(&self) -> Result<NewLearning, ValidationError> {
        let mut request = NewLearning::new(&self.topic, self.category.value());
        if !self.source.trim().is_empty() {
            request = request.with_source(&self.source);
        }
        request.validated()
    }
}

/// Fields of the "add applied skill" form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppliedSkillField {
    #[default]
    Type,
    Action,
    Notes,
}

impl AppliedSkillField {
    fn next(self) -> Self {
        match self {
            Self::Type => Self::Action,
            Self::Action => Self::Notes,
            Self::Notes => Self::Type,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Type => Self::Notes,
            Self::Action => Self::Type,
            Self::Notes => Self::Action,
        }
    }
}

/// "Add applied skill" form, bound to the learning it was opened for.
#[derive(Debug, Clone, Default)]
pub struct AppliedSkillForm {
    pub learning_id: String,
    pub kind: OptionField,
    pub applied_action: String,
    pub notes: String,
    pub focus: AppliedSkillField,
}

impl AppliedSkillForm {
    pub fn new(learning_id: impl Into<String>, skill_types: Vec<String>) -> Self {
        Self {
            learning_id: learning_id.into(),
            kind: OptionField::new(skill_types),
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            AppliedSkillField::Action => self.applied_action.push(c),
            AppliedSkillField::Notes => self.notes.push(c),
            AppliedSkillField::Type => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            AppliedSkillField::Action => {
                self.applied_action.pop();
            }
            AppliedSkillField::Notes => {
                self.notes.pop();
            }
            AppliedSkillField::Type => {}
        }
    }

    pub fn next_option(&mut self) {
        if self.focus == AppliedSkillField::Type {
            self.kind.next();
        }
    }

    pub fn prev_option(&mut self) {
        if self.focus == AppliedSkillField::Type {
            self.kind.prev();
        }
    }

    pub fn to_request(&self) -> Result<NewAppliedSkill, ValidationError> {
        if self.learning_id.trim().is_empty() {
            return Err(ValidationError::MissingLearningId);
        }
        let mut request = NewAppliedSkill::new(self.kind.value());
        if !self.applied_action.trim().is_empty() {
            request = request.with_applied_action(&self.applied_action);
        }
        if !self.notes.trim().is_empty() {
            request = request.with_notes(&self.notes);
        }
        request.validated()
    }
}

/// The open modal, if any.
#[derive(Debug, Clone)]
pub enum Modal {
    AddLearning(LearningForm),
    AddAppliedSkill(AppliedSkillForm),
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::AddLearning(_) => "Add learning",
            Modal::AddAppliedSkill(_) => "Add applied skill",
        }
    }

    pub fn focus_next(&mut self) {
        match self {
            Modal::AddLearning(form) => form.focus_next(),
            Modal::AddAppliedSkill(form) => form.focus_next(),
        }
    }

    pub fn focus_prev(&mut self) {
        match self {
            Modal::AddLearning(form) => form.focus_prev(),
            Modal::AddAppliedSkill(form) => form.focus_prev(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        match self {
            Modal::AddLearning(form) => form.insert_char(c),
            Modal::AddAppliedSkill(form) => form.insert_char(c),
        }
    }

    pub fn backspace(&mut self) {
        match self {
            Modal::AddLearning(form) => form.backspace(),
            Modal::AddAppliedSkill(form) => form.backspace(),
        }
    }

    pub fn next_option(&mut self) {
        match self {
            Modal::AddLearning(form) => form.next_option(),
            Modal::AddAppliedSkill(form) => form.next_option(),
        }
    }

    pub fn prev_option(&mut self) {
        match self {
            Modal::AddLearning(form) => form.prev_option(),
            Modal::AddAppliedSkill(form) => form.prev_option(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["Programming".into(), "Design".into(), "Other".into()]
    }

    #[test]
    fn test_option_field_cycles() {
        let mut field = OptionField::new(categories());
        assert_eq!(field.value(), "");

        field.next();
        assert_eq!(field.value(), "Programming");
        field.next();
        field.next();
        field.next();
        assert_eq!(field.value(), "Programming");

        field.prev();
        assert_eq!(field.value(), "Other");
    }

    #[test]
    fn test_option_field_without_options() {
        let mut field = OptionField::new(Vec::new());
        field.next();
        field.prev();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_learning_form_typing_follows_focus() {
        let mut form = LearningForm::new(categories());
        "Async".chars().for_each(|c| form.insert_char(c));
        form.focus_next();
        form.insert_char('x');
        form.next_option();
        form.focus_next();
        "Blog".chars().for_each(|c| form.insert_char(c));
        form.backspace();

        assert_eq!(form.topic, "Async");
        assert_eq!(form.category.value(), "Programming");
        assert_eq!(form.source, "Blo");

        form.focus_next();
        assert_eq!(form.focus, LearningField::Topic);
        form.focus_prev();
        assert_eq!(form.focus, LearningField::Source);
    }

    #[test]
    fn test_learning_form_requires_topic_and_category() {
        let mut form = LearningForm::new(categories());
        assert_eq!(form.to_request(), Err(ValidationError::MissingTopic));

        form.topic = "  Async  ".into();
        assert_eq!(form.to_request(), Err(ValidationError::MissingCategory));

        form.focus = LearningField::Category;
        form.next_option();
        let request = form.to_request().unwrap();
        assert_eq!(request, NewLearning::new("Async", "Programming"));
    }


    #[test]
    fn test_applied_skill_form_request() {
        let mut form = AppliedSkillForm::new("12", vec!["Project".into(), "Practice".into()]);
        assert_eq!(form.to_request(), Err(ValidationError::MissingType));

        form.prev_option();
        form.focus_next();
        "Ported the importer".chars().for_each(|c| form.insert_char(c));

        let request = form.to_request().unwrap();
        assert_eq!(request.kind, "Practice");
        assert_eq!(request.applied_action.as_deref(), Some("Ported the importer"));
        assert_eq!(request.notes, None);
    }

    #[test]
    fn test_applied_skill_form_needs_learning() {
        let mut form = AppliedSkillForm::new("", vec!["Project".into()]);
        form.next_option();
        assert_eq!(form.to_request(), Err(ValidationError::MissingLearningId));
    }

    #[test]
    fn test_modal_dispatch() {
        let mut modal = Modal::AddLearning(LearningForm::new(categories()));
        modal.insert_char('R');
        modal.focus_next();
        modal.next_option();
        match &modal {
            Modal::AddLearning(form) => {
                assert_eq!(form.topic, "R");
                assert_eq!(form.category.value(), "Programming");
            }
            other => panic!("unexpected modal {:?}", other),
        }
        assert_eq!(modal.title(), "Add learning");
    }
}
