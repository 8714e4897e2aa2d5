//! Informational pages. Literal content only.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::nav::Page;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct Entry {
    pub heading: &'static str,
    pub detail: &'static str,
}

pub struct StaticPage {
    pub title: &'static str,
    pub summary: &'static str,
    pub entries: &'static [Entry],
}

static STUDY: StaticPage = StaticPage {
    title: "Study Resources",
    summary: "Study material for every stage of the exam journey.",
    entries: &[
        Entry {
            heading: "Study Guides",
            detail: "Guides covering all exam topics with detailed explanations.",
        },
        Entry {
            heading: "Practice Papers",
            detail: "Previous year papers and mock tests.",
        },
        Entry {
            heading: "Video Lectures",
            detail: "Expert-led tutorials breaking down complex concepts.",
        },
        Entry {
            heading: "Downloadable Notes",
            detail: "Concise revision notes for offline study.",
        },
    ],
};

static PRACTICE: StaticPage = StaticPage {
    title: "Practice Zone",
    summary: "Sharpen your skills with practice resources and mock exams.",
    entries: &[
        Entry {
            heading: "Mock Tests",
            detail: "Full-length exams under real exam conditions.",
        },
        Entry {
            heading: "Timed Quizzes",
            detail: "Quick quizzes under time pressure.",
        },
        Entry {
            heading: "Topic-wise Practice",
            detail: "Focus on specific topics to strengthen weak areas.",
        },
        Entry {
            heading: "Performance Analytics",
            detail: "Track progress and find areas for improvement.",
        },
    ],
};

static EVENTS: StaticPage = StaticPage {
    title: "Upcoming Events",
    summary: "Workshops, masterclasses and networking sessions.",
    entries: &[
        Entry {
            heading: "Finals Preparation Workshop",
            detail: "Feb 15, 2026 · 10:00 AM - 4:00 PM · Online · 200+ registered",
        },
        Entry {
            heading: "Tax Planning Masterclass",
            detail: "Feb 22, 2026 · 2:00 PM - 5:00 PM · Mumbai · 50 seats",
        },
        Entry {
            heading: "Networking Meet",
            detail: "Mar 5, 2026 · 6:00 PM - 9:00 PM · Delhi · 100 seats",
        },
    ],
};

static JOBS: StaticPage = StaticPage {
    title: "Job Board",
    summary: "Career opportunities for finance professionals.",
    entries: &[
        Entry {
            heading: "Senior Auditor",
            detail: "Deloitte India · Mumbai · ₹12-18 LPA · Full-time",
        },
        Entry {
            heading: "Tax Consultant",
            detail: "KPMG · Bangalore · ₹10-15 LPA · Full-time",
        },
        Entry {
            heading: "Financial Analyst",
            detail: "Goldman Sachs · Mumbai · ₹15-22 LPA · Full-time",
        },
        Entry {
            heading: "Internal Auditor",
            detail: "Tata Group · Delhi · ₹8-12 LPA · Full-time",
        },
    ],
};

static MENTORS: StaticPage = StaticPage {
    title: "Our Mentors",
    summary: "Learn from people who have walked the path you're on.",
    entries: &[
        Entry {
            heading: "Priya Sharma",
            detail: "Senior Partner, Big 4 · Audit, Taxation · 15+ years",
        },
        Entry {
            heading: "Rajesh Kumar",
            detail: "CFO, Fortune 500 · Finance, Strategy · 20+ years",
        },
        Entry {
            heading: "Anita Desai",
            detail: "Tax Expert & Author · GST, Income Tax · 12+ years",
        },
        Entry {
            heading: "Vikram Singh",
            detail: "Startup Advisor · Compliance, Fundraising · 10+ years",
        },
    ],
};

static PRIVACY: StaticPage = StaticPage {
    title: "Privacy Policy",
    summary: "Last updated: January 21, 2026",
    entries: &[
        Entry {
            heading: "1. Information We Collect",
            detail: "Information you provide directly, such as your name, email address and submitted content.",
        },
        Entry {
            heading: "2. How We Use Your Information",
            detail: "To provide and improve the service, send updates and protect against fraud.",
        },
        Entry {
            heading: "3. Information Sharing",
            detail: "Shared only with service providers acting on our behalf or when required by law.",
        },
        Entry {
            heading: "4. Data Security",
            detail: "Reasonable measures protect your information from loss, theft and misuse.",
        },
    ],
};

static TERMS: StaticPage = StaticPage {
    title: "Terms of Service",
    summary: "Last updated: January 21, 2026",
    entries: &[
        Entry {
            heading: "1. Acceptance of Terms",
            detail: "Using the service means agreeing to these terms and applicable law.",
        },
        Entry {
            heading: "2. Use License",
            detail: "Materials are licensed for personal, non-commercial use only.",
        },
        Entry {
            heading: "3. User Content",
            detail: "You keep ownership of what you post and grant a license to display it.",
        },
        Entry {
            heading: "4. Disclaimer",
            detail: "Materials are provided as is, without warranties of any kind.",
        },
        Entry {
            heading: "5. Limitations",
            detail: "No liability for damages arising from use of the materials.",
        },
    ],
};

/// Literal content for every page except `Home`.
pub fn static_page(page: Page) -> Option<&'static StaticPage> {
    match page {
        Page::Home => None,
        Page::Study => Some(&STUDY),
        Page::Practice => Some(&PRACTICE),
        Page::Events => Some(&EVENTS),
        Page::Jobs => Some(&JOBS),
        Page::Mentors => Some(&MENTORS),
        Page::Privacy => Some(&PRIVACY),
        Page::Terms => Some(&TERMS),
    }
}

pub fn render_static(frame: &mut Frame<'_>, area: Rect, page: &StaticPage) {
    let mut lines = vec![
        Line::from(Span::styled(
            page.summary,
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    for entry in page.entries {
        lines.push(Line::from(Span::styled(
            entry.heading,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.detail),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", page.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
