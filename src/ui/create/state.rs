use crate::model::{Article, ArticleDraft, CATEGORIES};
use crate::sync::MutationState;
use crate::ui::mvi::UiState;

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Categories,
    Description,
    CoverImage,
    Content,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Categories,
        FormField::Description,
        FormField::CoverImage,
        FormField::Content,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title *",
            FormField::Categories => "Categories * (select at least one)",
            FormField::Description => "Description *",
            FormField::CoverImage => "Cover Image URL (optional)",
            FormField::Content => "Content *",
        }
    }

    pub fn next(self) -> FormField {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> FormField {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateForm {
    pub draft: ArticleDraft,
    pub focus: FormField,
    /// Highlighted entry in the category picker.
    pub category_cursor: usize,
    pub submission: MutationState<Article>,
}

impl CreateForm {
    pub fn is_selected(&self, category: &str) -> bool {
        self.draft.categories.iter().any(|c| c == category)
    }

    /// Publish is disabled while invalid or while a request is running.
    pub fn can_submit(&self) -> bool {
        self.draft.is_valid() && !self.submission.is_pending() && !self.submission.is_success()
    }

    pub fn cursor_category(&self) -> &'static str {
        CATEGORIES[self.category_cursor.min(CATEGORIES.len() - 1)]
    }
}

/// Modal create form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CreateFormState {
    #[default]
    Hidden,
    Open(CreateForm),
}

impl UiState for CreateFormState {}

impl CreateFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn form(&self) -> Option<&CreateForm> {
        match self {
            Self::Open(form) => Some(form),
            Self::Hidden => None,
        }
    }
}
