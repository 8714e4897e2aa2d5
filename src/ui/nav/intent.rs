use crate::model::ArticleId;
use crate::ui::mvi::Intent;
use crate::ui::nav::state::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    Navigate(Page),
    SelectArticle(ArticleId),
    /// An article was deleted. Clears the selection if it pointed there.
    ArticleDeleted(ArticleId),
    ClearSelection,
}

impl Intent for NavIntent {}
