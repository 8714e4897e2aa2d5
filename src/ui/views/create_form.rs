use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::CATEGORIES;
use crate::sync::MutationState;
use crate::ui::create::{CreateForm, FormField};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
    TAG_BACKGROUND,
};

const CURSOR: &str = "▏";

pub struct CreateFormView<'a> {
    pub form: &'a CreateForm,
}

impl CreateFormView<'_> {
    pub fn render(&self, frame: &mut Frame<'_>, body: Rect) {
        let area = centered_rect(70, 90, body);
        frame.render_widget(Clear, area);

        let popup = Block::default()
            .title(Span::styled(
                " Create New Blog ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));

        frame.render_widget(
            Paragraph::new(self.lines())
                .block(popup)
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let form = self.form;
        let draft = &form.draft;
        let mut lines = Vec::new();

        for field in FormField::ORDER {
            let focused = form.focus == field;
            let label_style = if focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            lines.push(Line::from(Span::styled(field.label(), label_style)));

            match field {
                FormField::Title => lines.push(text_line(&draft.title, "Enter blog title...", focused)),
                FormField::Description => lines.push(text_line(
                    &draft.description,
                    "Brief summary of the blog...",
                    focused,
                )),
                FormField::CoverImage => {
                    lines.push(text_line(&draft.cover_image, "https://...", focused));
                    lines.push(Line::from(Span::styled(
                        "  Leave empty for a random default image",
                        Style::default().fg(MUTED_TEXT),
                    )));
                }
                FormField::Content => {
                    if draft.content.is_empty() {
                        lines.push(text_line("", "Write your blog content here...", focused));
                    } else {
                        let count = draft.content.split('\n').count();
                        for (index, row) in draft.content.split('\n').enumerate() {
                            let show_cursor = focused && index + 1 == count;
                            lines.push(text_line(row, "", show_cursor));
                        }
                    }
                }
                FormField::Categories => lines.push(self.category_line(focused)),
            }
            lines.push(Line::from(""));
        }

        lines.push(self.status_line());
        lines
    }

    fn category_line(&self, focused: bool) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        for (index, category) in CATEGORIES.iter().enumerate() {
            let selected = self.form.is_selected(category);
            let mut style = if selected {
                Style::default().fg(HEADER_TEXT).bg(TAG_BACKGROUND)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            if focused && index == self.form.category_cursor {
                style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::UNDERLINED);
            }
            let mark = if selected { "✓" } else { " " };
            spans.push(Span::styled(format!("[{}] {}", mark, category), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn status_line(&self) -> Line<'static> {
        match &self.form.submission {
            MutationState::Pending => {
                Line::from(Span::styled("Creating...", Style::default().fg(MUTED_TEXT)))
            }
            MutationState::Success(_) => Line::from(Span::styled(
                "Blog Created!",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            )),
            MutationState::Error(err) => Line::from(Span::styled(
                format!("Error: {}", err),
                Style::default().fg(STATUS_ERROR),
            )),
            MutationState::Idle => match self.form.draft.validate() {
                Ok(()) => Line::from(vec![
                    Span::styled("Ctrl+S", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
                    Span::styled(" Publish Blog", Style::default().fg(HEADER_TEXT)),
                ]),
                Err(reason) => Line::from(Span::styled(
                    reason.to_string(),
                    Style::default().fg(MUTED_TEXT),
                )),
            },
        }
    }
}

fn text_line(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    if value.is_empty() && !placeholder.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)));
    }
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}
