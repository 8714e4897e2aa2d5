use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::ToggleFilter(tag) => {
                let filter = if state.filter.as_deref() == Some(tag.as_str()) {
                    None
                } else {
                    Some(tag)
                };
                ListState { filter, cursor: 0 }
            }
            ListIntent::CycleFilter(categories) => {
                let next = match &state.filter {
                    None => categories.first().cloned(),
                    Some(current) => categories
                        .iter()
                        .position(|c| c == current)
                        .and_then(|i| categories.get(i + 1))
                        .cloned(),
                };
                ListState {
                    filter: next,
                    cursor: 0,
                }
            }
            ListIntent::ClearFilter => ListState {
                filter: None,
                cursor: 0,
            },
            ListIntent::MoveUp { len } => {
                let cursor = if len == 0 {
                    0
                } else if state.cursor == 0 {
                    len - 1
                } else {
                    state.cursor.min(len) - 1
                };
                ListState { cursor, ..state }
            }
            ListIntent::MoveDown { len } => {
                let cursor = if state.cursor + 1 >= len {
                    0
                } else {
                    state.cursor + 1
                };
                ListState { cursor, ..state }
            }
            ListIntent::Clamp { len } => ListState {
                cursor: state.cursor.min(len.saturating_sub(1)),
                ..state
            },
            ListIntent::Focus(index) => ListState {
                cursor: index,
                ..state
            },
        }
    }
}
