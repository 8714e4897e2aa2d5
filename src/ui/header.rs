use crate::ui::nav::{NavState, Page};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page tabs with their hotkeys, and the current location underneath.
pub struct Header<'a> {
    nav: &'a NavState,
    href: String,
}

impl<'a> Header<'a> {
    pub fn new(nav: &'a NavState, href: String) -> Self {
        Self { nav, href }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut tabs = vec![Span::styled(" blogview ", active_style)];
        for (index, page) in Page::ALL.iter().enumerate() {
            tabs.push(Span::styled(" │ ", separator_style));
            let style = if *page == self.nav.page {
                active_style
            } else {
                text_style
            };
            tabs.push(Span::styled(format!("{} {}", index + 1, page.label()), style));
        }

        let address = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.href.clone(), Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(vec![Line::from(tabs), address]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
