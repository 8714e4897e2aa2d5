use super::intent::Intent;
use super::state::UiState;

/// The only place a UI state changes.
///
/// `reduce` is pure: no I/O, no clocks, no randomness. Anything that needs
/// those happens before the intent is built.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
