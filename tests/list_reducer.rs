use blogview::ui::list::{ListIntent, ListReducer, ListState};
use blogview::ui::mvi::Reducer;

fn categories() -> Vec<String> {
    vec!["CAREER".to_string(), "FINANCE".to_string(), "TECH".to_string()]
}

#[test]
fn toggle_selects_then_clears() {
    let state = ListReducer::reduce(ListState::default(), ListIntent::ToggleFilter("TECH".into()));
    assert_eq!(state.filter.as_deref(), Some("TECH"));
    assert_eq!(state.title(), "TECH Articles");

    let state = ListReducer::reduce(state, ListIntent::ToggleFilter("TECH".into()));
    assert_eq!(state.filter, None);
    assert_eq!(state.title(), "Latest Articles");
}

#[test]
fn toggle_switches_between_tags() {
    let state = ListReducer::reduce(ListState::default(), ListIntent::ToggleFilter("TECH".into()));
    let state = ListReducer::reduce(state, ListIntent::ToggleFilter("FINANCE".into()));
    assert_eq!(state.filter.as_deref(), Some("FINANCE"));
}

#[test]
fn cycle_walks_categories_then_back_to_all() {
    let mut state = ListState::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        state = ListReducer::reduce(state, ListIntent::CycleFilter(categories()));
        seen.push(state.filter.clone());
    }
    assert_eq!(
        seen,
        vec![
            Some("CAREER".to_string()),
            Some("FINANCE".to_string()),
            Some("TECH".to_string()),
            None,
        ]
    );
}

#[test]
fn cycle_from_vanished_tag_resets() {
    let state = ListState {
        filter: Some("LIFESTYLE".to_string()),
        cursor: 0,
    };
    let state = ListReducer::reduce(state, ListIntent::CycleFilter(categories()));
    assert_eq!(state.filter, None);
}

#[test]
fn filter_change_resets_cursor() {
    let state = ListState {
        filter: None,
        cursor: 3,
    };
    let state = ListReducer::reduce(state, ListIntent::ToggleFilter("TECH".into()));
    assert_eq!(state.cursor, 0);
    let state = ListReducer::reduce(ListState { cursor: 2, ..state }, ListIntent::ClearFilter);
    assert_eq!(state, ListState::default());
}

#[test]
fn cursor_wraps() {
    let state = ListReducer::reduce(ListState::default(), ListIntent::MoveUp { len: 3 });
    assert_eq!(state.cursor, 2);
    let state = ListReducer::reduce(state, ListIntent::MoveDown { len: 3 });
    assert_eq!(state.cursor, 0);
    let state = ListReducer::reduce(state, ListIntent::MoveDown { len: 3 });
    assert_eq!(state.cursor, 1);
}

#[test]
fn empty_list_keeps_cursor_at_zero() {
    let state = ListReducer::reduce(ListState::default(), ListIntent::MoveUp { len: 0 });
    assert_eq!(state.cursor, 0);
    let state = ListReducer::reduce(state, ListIntent::MoveDown { len: 0 });
    assert_eq!(state.cursor, 0);
}

#[test]
fn clamp_after_list_shrinks() {
    let state = ListState {
        filter: None,
        cursor: 5,
    };
    let state = ListReducer::reduce(state, ListIntent::Clamp { len: 2 });
    assert_eq!(state.cursor, 1);
    let state = ListReducer::reduce(state, ListIntent::Clamp { len: 0 });
    assert_eq!(state.cursor, 0);
}
