use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    /// Select `tag`, or clear the filter if it is already active.
    ToggleFilter(String),
    /// Step through the given categories, ending back at "no filter".
    CycleFilter(Vec<String>),
    ClearFilter,
    /// Move the cursor within a list of `len` items, wrapping at the ends.
    MoveUp { len: usize },
    MoveDown { len: usize },
    /// Keep the cursor inside a list that changed size.
    Clamp { len: usize },
    /// Put the cursor on `index`.
    Focus(usize),
}

impl Intent for ListIntent {}
