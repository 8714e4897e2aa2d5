use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{Article, ArticleId};
use crate::sync::QueryState;
use crate::ui::list::ListState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TAG_BACKGROUND,
};
use crate::ui::views::{error_lines, loading_lines, tag_spans};

/// Lines per card: title, meta, description, spacer.
const CARD_HEIGHT: usize = 4;

pub struct ArticleListView<'a> {
    pub query: &'a QueryState<Vec<Article>>,
    pub visible: &'a [Article],
    pub categories: &'a [String],
    pub state: &'a ListState,
    pub selected: Option<ArticleId>,
}

impl ArticleListView<'_> {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let refreshing = matches!(
            self.query,
            QueryState::Success {
                is_fetching: true,
                ..
            }
        );
        let mut title = format!(" {} ", self.state.title());
        if refreshing {
            title.push_str("· refreshing ");
        }

        let block = Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        let (lines, scroll) = match self.query {
            QueryState::Idle | QueryState::Loading => (loading_lines("Loading articles..."), 0),
            QueryState::Error(err) => (
                error_lines("Failed to load blogs", &err.to_string()),
                0,
            ),
            QueryState::Success { .. } => self.article_lines(area),
        };

        frame.render_widget(
            Paragraph::new(lines).block(block).scroll((scroll, 0)),
            area,
        );
    }

    fn article_lines(&self, area: Rect) -> (Vec<Line<'static>>, u16) {
        let mut lines = vec![self.filter_line(), Line::from("")];
        let header_len = lines.len();

        if self.visible.is_empty() {
            let text = match &self.state.filter {
                Some(tag) => format!("No articles found for \"{}\"", tag),
                None => "No articles yet. Press n to write the first one.".to_string(),
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(MUTED_TEXT),
            )));
            return (lines, 0);
        }

        for (index, article) in self.visible.iter().enumerate() {
            let focused = index == self.state.cursor;
            let open = self.selected == Some(article.id);
            lines.extend(card_lines(article, focused, open));
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let cursor_bottom = header_len + (self.state.cursor + 1) * CARD_HEIGHT;
        let scroll = cursor_bottom.saturating_sub(inner_height);
        (lines, u16::try_from(scroll).unwrap_or(u16::MAX))
    }

    fn filter_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Filter: ", Style::default().fg(MUTED_TEXT))];
        let active = Style::default()
            .fg(HEADER_TEXT)
            .bg(TAG_BACKGROUND)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(MUTED_TEXT);

        let all_style = if self.state.filter.is_none() {
            active
        } else {
            inactive
        };
        spans.push(Span::styled(" All ", all_style));
        for category in self.categories {
            let style = if self.state.filter.as_deref() == Some(category.as_str()) {
                active
            } else {
                inactive
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", category), style));
        }
        Line::from(spans)
    }
}

fn card_lines(article: &Article, focused: bool, open: bool) -> Vec<Line<'static>> {
    let marker = if open { "▌ " } else { "  " };
    let mut title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    if open {
        title_style = title_style.fg(ACCENT);
    }

    let mut meta = vec![Span::raw("  ")];
    meta.extend(tag_spans(&article.category));
    meta.push(Span::styled(
        format!("  {}", article.display_date()),
        Style::default().fg(MUTED_TEXT),
    ));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(article.title.clone(), title_style),
        ]),
        Line::from(meta),
        Line::from(Span::styled(
            format!("  {}", article.description),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    if focused {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        lines = lines.into_iter().map(|line| line.style(highlight)).collect();
    }
    lines.push(Line::from(""));
    lines
}
