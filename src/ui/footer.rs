use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which set of key hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Home,
    Page,
    ConfirmDelete,
    Form,
}

impl FooterMode {
    fn hints(&self) -> &'static str {
        match self {
            FooterMode::Home => " ↑↓: Move │ Enter: Open │ f: Filter │ c: Clear │ n: New │ s: Share │ d: Delete │ r: Retry │ 1-8: Pages │ Ctrl+Q: Quit",
            FooterMode::Page => " 1-8: Pages │ Ctrl+Q: Quit",
            FooterMode::ConfirmDelete => " y: Delete │ n/Esc: Cancel",
            FooterMode::Form => " Tab: Next field │ ←→ Space: Categories │ Ctrl+S: Publish │ Esc: Close",
        }
    }
}

pub struct Footer {
    mode: FooterMode,
}

impl Footer {
    pub fn new(mode: FooterMode) -> Self {
        Self { mode }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.mode.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
