use crate::ui::mvi::UiState;

/// Category filter and cursor for the article list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    pub filter: Option<String>,
    /// Index into the visible (filtered, sorted) articles.
    pub cursor: usize,
}

impl UiState for ListState {}

impl ListState {
    pub fn title(&self) -> String {
        match &self.filter {
            Some(tag) => format!("{} Articles", tag),
            None => "Latest Articles".to_string(),
        }
    }
}
