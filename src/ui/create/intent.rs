use crate::api::ApiError;
use crate::model::Article;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CreateIntent {
    Open,
    /// Close and discard the draft.
    Close,
    FocusNext,
    FocusPrev,
    /// Type into the focused text field.
    Input(char),
    Backspace,
    /// Move the category cursor by `delta`, wrapping.
    MoveCategory(i32),
    /// Add or remove the highlighted category.
    ToggleCategory,
    SubmitStarted,
    SubmitFinished(Result<Article, ApiError>),
}

impl Intent for CreateIntent {}
