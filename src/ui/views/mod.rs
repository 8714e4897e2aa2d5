//! Widgets for the home page and the create form.

pub mod create_form;
pub mod detail;
pub mod list;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, TAG_BACKGROUND};

/// Category badges, space separated.
pub(crate) fn tag_spans(tags: &[String]) -> Vec<Span<'static>> {
    let style = Style::default().fg(HEADER_TEXT).bg(TAG_BACKGROUND);
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", tag), style));
    }
    spans
}

pub(crate) fn loading_lines(text: &str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    ))]
}

/// Error heading, server message and the retry hint.
pub(crate) fn error_lines(heading: &str, message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(MUTED_TEXT)),
            Span::styled("r", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(" to retry", Style::default().fg(MUTED_TEXT)),
        ]),
    ]
}
