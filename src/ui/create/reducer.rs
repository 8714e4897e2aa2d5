use crate::model::CATEGORIES;
use crate::sync::MutationState;
use crate::ui::create::intent::CreateIntent;
use crate::ui::create::state::{CreateForm, CreateFormState, FormField};
use crate::ui::mvi::Reducer;

pub struct CreateReducer;

impl Reducer for CreateReducer {
    type State = CreateFormState;
    type Intent = CreateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateIntent::Open => match state {
                CreateFormState::Open(form) => CreateFormState::Open(form),
                CreateFormState::Hidden => CreateFormState::Open(CreateForm::default()),
            },
            CreateIntent::Close => CreateFormState::Hidden,
            other => match state {
                CreateFormState::Open(form) => CreateFormState::Open(reduce_form(form, other)),
                CreateFormState::Hidden => CreateFormState::Hidden,
            },
        }
    }
}

fn reduce_form(mut form: CreateForm, intent: CreateIntent) -> CreateForm {
    // The draft is frozen while publishing or after success.
    let locked = form.submission.is_pending() || form.submission.is_success();

    match intent {
        CreateIntent::FocusNext => form.focus = form.focus.next(),
        CreateIntent::FocusPrev => form.focus = form.focus.prev(),
        CreateIntent::Input(ch) if !locked => {
            if let Some(field) = text_field(&mut form) {
                field.push(ch);
            }
        }
        CreateIntent::Backspace if !locked => {
            if let Some(field) = text_field(&mut form) {
                field.pop();
            }
        }
        CreateIntent::MoveCategory(delta) => {
            let len = CATEGORIES.len() as i64;
            let next = (form.category_cursor as i64 + delta as i64).rem_euclid(len);
            form.category_cursor = next as usize;
        }
        CreateIntent::ToggleCategory if !locked => {
            let category = form.cursor_category().to_string();
            let categories = &mut form.draft.categories;
            match categories.iter().position(|c| *c == category) {
                Some(index) => {
                    categories.remove(index);
                }
                None => categories.push(category),
            }
        }
        CreateIntent::SubmitStarted => form.submission = MutationState::Pending,
        CreateIntent::SubmitFinished(result) => {
            form.submission = MutationState::from_result(result);
        }
        _ => {}
    }
    form
}

fn text_field(form: &mut CreateForm) -> Option<&mut String> {
    let draft = &mut form.draft;
    match form.focus {
        FormField::Title => Some(&mut draft.title),
        FormField::Description => Some(&mut draft.description),
        FormField::CoverImage => Some(&mut draft.cover_image),
        FormField::Content => Some(&mut draft.content),
        FormField::Categories => None,
    }
}
