use crate::ui::nav::location::{from_query, to_query};
use crate::ui::nav::state::NavState;

/// In-process stand-in for a browser address bar.
///
/// Read once at startup to restore navigation state, then written through
/// on every navigation change without reloading anything.
#[derive(Debug, Clone)]
pub struct AddressBar {
    base: String,
    query: String,
}

impl AddressBar {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches(&['?', '/'][..]).to_string(),
            query: String::new(),
        }
    }

    /// Start from an initial location and return the state it encodes.
    pub fn restore(base: impl Into<String>, location: &str) -> (Self, NavState) {
        let state = from_query(location);
        let mut bar = Self::new(base);
        bar.query = to_query(&state);
        (bar, state)
    }

    /// Mirror `state` into the location. Returns false when nothing changed.
    pub fn push_state(&mut self, state: &NavState) -> bool {
        let query = to_query(state);
        if query == self.query {
            return false;
        }
        tracing::debug!(location = %query, "Location updated");
        self.query = query;
        true
    }

    /// Query part with a leading `?`, or empty.
    pub fn location(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }

    /// Shareable link for the current location.
    pub fn href(&self) -> String {
        format!("{}{}", self.base, self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::nav::state::Page;

    #[test]
    fn push_only_on_change() {
        let mut bar = AddressBar::new("blogview://home");
        assert!(!bar.push_state(&NavState::default()));
        assert!(bar.push_state(&NavState::new(Page::Study, None)));
        assert!(!bar.push_state(&NavState::new(Page::Study, None)));
        assert_eq!(bar.location(), "?page=study");
    }

    #[test]
    fn href_joins_base_and_query() {
        let mut bar = AddressBar::new("blogview://home/");
        assert_eq!(bar.href(), "blogview://home");
        bar.push_state(&NavState::new(Page::Home, Some(4)));
        assert_eq!(bar.href(), "blogview://home?blogId=4");
    }

    #[test]
    fn restore_normalizes_location() {
        let (bar, state) = AddressBar::restore("blogview://home", "?page=nope&blogId=x");
        assert_eq!(state, NavState::default());
        assert_eq!(bar.location(), "");
    }
}
