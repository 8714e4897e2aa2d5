use crate::api::ApiError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    /// First delete press: ask for confirmation.
    RequestDelete,
    CancelDelete,
    DeleteStarted,
    DeleteFinished(Result<(), ApiError>),
    LinkCopied,
    ShareExpired,
    /// A different article is now shown.
    Reset,
}

impl Intent for DetailIntent {}
