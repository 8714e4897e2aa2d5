use std::fmt;
use std::str::FromStr;

use crate::model::ArticleId;
use crate::ui::mvi::UiState;

/// Top-level pages. `Home` hosts the article list and detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Study,
    Practice,
    Events,
    Jobs,
    Mentors,
    Privacy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Study,
        Page::Practice,
        Page::Events,
        Page::Jobs,
        Page::Mentors,
        Page::Privacy,
        Page::Terms,
    ];

    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Study => "study",
            Page::Practice => "practice",
            Page::Events => "events",
            Page::Jobs => "jobs",
            Page::Mentors => "mentors",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Blog",
            Page::Study => "Study",
            Page::Practice => "Practice",
            Page::Events => "Events",
            Page::Jobs => "Job Board",
            Page::Mentors => "Mentors",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms of Service",
        }
    }

    /// Page bound to a 1-based hotkey index.
    pub fn from_index(index: usize) -> Option<Page> {
        index.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page '{}'", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Active page plus the article shown in the detail pane.
///
/// The selection survives navigation to other pages; it is only rendered
/// on `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub page: Page,
    pub selected: Option<ArticleId>,
}

impl UiState for NavState {}

impl NavState {
    pub fn new(page: Page, selected: Option<ArticleId>) -> Self {
        Self {
            page,
            selected: selected.filter(|id| *id != 0),
        }
    }

    /// Selected id, zero when nothing is selected.
    pub fn selected_id(&self) -> ArticleId {
        self.selected.unwrap_or(0)
    }

    pub fn shows_detail(&self) -> bool {
        self.page == Page::Home
    }
}
