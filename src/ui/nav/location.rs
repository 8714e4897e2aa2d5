//! Navigation state <-> query string.
//!
//! `page` is omitted for the default page and `blogId` when nothing is
//! selected, so the home page with no selection serializes to an empty
//! query. Parsing never fails: unknown pages fall back to home and any
//! `blogId` that is not a positive integer means no selection.

use reqwest::Url;

use crate::model::ArticleId;
use crate::ui::nav::state::{NavState, Page};

const PAGE_PARAM: &str = "page";
const BLOG_ID_PARAM: &str = "blogId";
const PLACEHOLDER_BASE: &str = "blogview://home";

/// Query string for `state`, without the leading `?`.
pub fn to_query(state: &NavState) -> String {
    let mut params = Vec::with_capacity(2);
    if state.page != Page::default() {
        params.push(format!("{}={}", PAGE_PARAM, state.page.as_str()));
    }
    if let Some(id) = state.selected.filter(|id| *id != 0) {
        params.push(format!("{}={}", BLOG_ID_PARAM, id));
    }
    params.join("&")
}

/// Read navigation state from a query string (`?a=b`, `a=b`) or a full
/// link carrying one.
pub fn from_query(location: &str) -> NavState {
    let url = parse_location(location.trim());
    let Some(url) = url else {
        return NavState::default();
    };

    let mut page = None;
    let mut selected = None;
    for (key, value) in url.query_pairs() {
        if key == PAGE_PARAM && page.is_none() {
            page = Some(value.parse::<Page>().unwrap_or_default());
        } else if key == BLOG_ID_PARAM && selected.is_none() {
            selected = Some(parse_article_id(&value));
        }
    }

    NavState::new(page.unwrap_or_default(), selected.flatten())
}

fn parse_article_id(value: &str) -> Option<ArticleId> {
    value.trim().parse::<ArticleId>().ok().filter(|id| *id != 0)
}

fn parse_location(location: &str) -> Option<Url> {
    if location.contains("://") {
        return Url::parse(location).ok();
    }
    let query = location.trim_start_matches('?');
    Url::parse(&format!("{}?{}", PLACEHOLDER_BASE, query)).ok()
}
