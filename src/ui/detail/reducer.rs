use crate::sync::MutationState;
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailState, ShareFeedback};
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::RequestDelete => DetailState {
                confirm_delete: true,
                delete: MutationState::Idle,
                ..state
            },
            // Cancelling is ignored while the request is running.
            DetailIntent::CancelDelete if state.is_deleting() => state,
            DetailIntent::CancelDelete => DetailState {
                confirm_delete: false,
                delete: MutationState::Idle,
                ..state
            },
            DetailIntent::DeleteStarted => DetailState {
                confirm_delete: true,
                delete: MutationState::Pending,
                ..state
            },
            DetailIntent::DeleteFinished(Ok(())) => DetailState {
                confirm_delete: false,
                delete: MutationState::Success(()),
                ..state
            },
            DetailIntent::DeleteFinished(Err(err)) => DetailState {
                confirm_delete: true,
                delete: MutationState::Error(err),
                ..state
            },
            DetailIntent::LinkCopied => DetailState {
                share: ShareFeedback::Copied,
                ..state
            },
            DetailIntent::ShareExpired => DetailState {
                share: ShareFeedback::Idle,
                ..state
            },
            DetailIntent::Reset => DetailState::default(),
        }
    }
}
