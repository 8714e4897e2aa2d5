use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Article;
use crate::sync::{MutationState, QueryState};
use crate::ui::detail::{DetailState, ShareFeedback};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use crate::ui::views::{error_lines, loading_lines, tag_spans};

pub struct ArticleDetailView<'a> {
    pub query: &'a QueryState<Article>,
    pub state: &'a DetailState,
}

impl ArticleDetailView<'_> {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        let lines = match self.query {
            QueryState::Idle => vec![
                Line::from(Span::styled(
                    "Select an article",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Pick an article from the list and press Enter to read it.",
                    Style::default().fg(MUTED_TEXT),
                )),
            ],
            QueryState::Loading => loading_lines("Loading article..."),
            QueryState::Error(err) => error_lines("Failed to load article", &err.to_string()),
            QueryState::Success { data, .. } => self.article_lines(data),
        };

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn article_lines(&self, article: &Article) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                article.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(tag_spans(&article.category)),
            Line::from(Span::styled(
                format!("{} · {} read", article.display_date(), article.read_time()),
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        if !article.cover_image.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Cover: {}", article.cover_image),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        lines.push(self.action_line());
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            article.description.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC),
        )));
        for paragraph in article.paragraphs() {
            lines.push(Line::from(""));
            lines.extend(paragraph.lines().map(|row| {
                Line::from(Span::styled(row.to_string(), Style::default().fg(HEADER_TEXT)))
            }));
        }
        lines
    }

    fn action_line(&self) -> Line<'static> {
        let key = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(HEADER_TEXT);

        if self.state.confirm_delete {
            let mut spans = match &self.state.delete {
                MutationState::Pending => {
                    vec![Span::styled("Deleting...", Style::default().fg(MUTED_TEXT))]
                }
                _ => vec![
                    Span::styled("Delete this article? ", Style::default().fg(STATUS_ERROR)),
                    Span::styled("y", key),
                    Span::styled(" yes  ", text),
                    Span::styled("n", key),
                    Span::styled(" cancel", text),
                ],
            };
            if let Some(err) = self.state.delete.error() {
                spans.push(Span::styled(
                    format!("  ({})", err),
                    Style::default().fg(STATUS_ERROR),
                ));
            }
            return Line::from(spans);
        }

        let share = match self.state.share {
            ShareFeedback::Copied => Span::styled("Copied!", Style::default().fg(STATUS_OK)),
            ShareFeedback::Idle => Span::styled(" Share", text),
        };
        let mut spans = Vec::new();
        if self.state.share == ShareFeedback::Idle {
            spans.push(Span::styled("s", key));
        }
        spans.push(share);
        spans.push(Span::raw("   "));
        spans.push(Span::styled("d", key));
        spans.push(Span::styled(" Delete", text));
        Line::from(spans)
    }
}
