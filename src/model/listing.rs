//! Ordering and filtering of article lists for display.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::article::Article;

/// Newest first. Articles with an unparseable date sort after all dated ones.
pub fn sort_by_date_desc(articles: &mut [Article]) {
    articles.sort_by(|a, b| match (a.published_at(), b.published_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Sorted, de-duplicated set of every tag in the list.
pub fn all_categories(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| a.category.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sort newest first and keep only articles carrying `filter`, if any.
pub fn visible_articles(articles: &[Article], filter: Option<&str>) -> Vec<Article> {
    let mut visible: Vec<Article> = match filter {
        Some(tag) => articles
            .iter()
            .filter(|a| a.has_category(tag))
            .cloned()
            .collect(),
        None => articles.to_vec(),
    };
    sort_by_date_desc(&mut visible);
    visible
}
