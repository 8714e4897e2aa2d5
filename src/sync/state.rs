use std::sync::Arc;

use crate::api::ApiError;

/// What a view sees for one cached read.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Disabled query (e.g. no article selected). No data, no error.
    Idle,
    Loading,
    Error(ApiError),
    Success {
        data: Arc<T>,
        /// A background refetch is running.
        is_fetching: bool,
    },
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            Self::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Lifecycle of one create or delete call.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationState<T> {
    Idle,
    Pending,
    Success(T),
    Error(ApiError),
}

impl<T> Default for MutationState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> MutationState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err),
        }
    }
}
