use crate::sync::MutationState;
use crate::ui::mvi::UiState;

/// Feedback for the share action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareFeedback {
    #[default]
    Idle,
    Copied,
}

/// Transient state of the article detail pane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// Second step of the delete flow is showing.
    pub confirm_delete: bool,
    pub delete: MutationState<()>,
    pub share: ShareFeedback,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_deleting(&self) -> bool {
        self.delete.is_pending()
    }
}
