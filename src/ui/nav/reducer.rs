use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Selection is kept across pages.
            NavIntent::Navigate(page) => NavState { page, ..state },
            NavIntent::SelectArticle(id) => NavState::new(state.page, Some(id)),
            NavIntent::ArticleDeleted(id) => {
                if state.selected == Some(id) {
                    NavState {
                        selected: None,
                        ..state
                    }
                } else {
                    state
                }
            }
            NavIntent::ClearSelection => NavState {
                selected: None,
                ..state
            },
        }
    }
}
