//! Modal forms for adding a learning or an applied skill.

use ratatui::{layout::Rect, Frame};

use super::components::{
    render_dialog_frame, render_input_field, render_option_selector, DialogFrameConfig,
    InputFieldConfig, INPUT_FIELD_HEIGHT, OPTION_SELECTOR_HEIGHT,
};
use super::layout::LayoutContext;
use crate::state::{AppliedSkillField, AppliedSkillForm, LearningField, LearningForm, Modal};

/// Content height of either form: two text fields and one selector.
const FORM_HEIGHT: u16 = INPUT_FIELD_HEIGHT * 2 + OPTION_SELECTOR_HEIGHT;

pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal, ctx: &LayoutContext) {
    let config = DialogFrameConfig::new(modal.title(), FORM_HEIGHT);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    match modal {
        Modal::AddLearning(form) => render_learning_form(frame, inner, form),
        Modal::AddAppliedSkill(form) => render_applied_skill_form(frame, inner, form),
    }
}

/// Slice the next `height` rows off the top of `area`.
fn take_rows(area: &mut Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let slice = Rect { height, ..*area };
    area.y += height;
    area.height -= height;
    slice
}

fn render_learning_form(frame: &mut Frame, mut area: Rect, form: &LearningForm) {
    let topic = InputFieldConfig::new("Topic *", &form.topic)
        .focused(form.focus == LearningField::Topic)
        .placeholder("What did you learn?");
    render_input_field(frame, take_rows(&mut area, INPUT_FIELD_HEIGHT), &topic);

    render_option_selector(
        frame,
        take_rows(&mut area, OPTION_SELECTOR_HEIGHT),
        "Category *",
        form.category.options(),
        form.category.selected(),
        form.focus == LearningField::Category,
    );

    let source = InputFieldConfig::new("Source", &form.source)
        .focused(form.focus == LearningField::Source)
        .placeholder("Book, course, colleague…");
    render_input_field(frame, take_rows(&mut area, INPUT_FIELD_HEIGHT), &source);
}

fn render_applied_skill_form(frame: &mut Frame, mut area: Rect, form: &AppliedSkillForm) {
    render_option_selector(
        frame,
        take_rows(&mut area, OPTION_SELECTOR_HEIGHT),
        "Type *",
        form.kind.options(),
        form.kind.selected(),
        form.focus == AppliedSkillField::Type,
    );

    let action = InputFieldConfig::new("What did you do?", &form.applied_action)
        .focused(form.focus == AppliedSkillField::Action);
    render_input_field(frame, take_rows(&mut area, INPUT_FIELD_HEIGHT), &action);

    let notes = InputFieldConfig::new("Notes", &form.notes)
        .focused(form.focus == AppliedSkillField::Notes);
    render_input_field(frame, take_rows(&mut area, INPUT_FIELD_HEIGHT), &notes);
}
