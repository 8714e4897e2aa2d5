use crate::ui::app::App;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_home};
use crate::ui::nav::Page;
use crate::ui::pages::{render_static, static_page};
use crate::ui::views::create_form::CreateFormView;
use crate::ui::views::detail::ArticleDetailView;
use crate::ui::views::list::ArticleListView;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.nav(), app.address_bar().href());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match static_page(app.nav().page) {
        Some(page) => render_static(frame, body, page),
        None => draw_home(frame, body, app),
    }

    let footer_widget = Footer::new(footer_mode(app));
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(form) = app.create_form().form() {
        CreateFormView { form }.render(frame, body);
    }
}

fn draw_home(frame: &mut Frame<'_>, body: ratatui::layout::Rect, app: &App) {
    let (list_area, detail_area) = split_home(body);

    let blogs = app.blogs_state();
    let visible = app.visible();
    let categories = app.categories();
    ArticleListView {
        query: &blogs,
        visible: &visible,
        categories: &categories,
        state: app.list(),
        selected: app.nav().selected,
    }
    .render(frame, list_area);

    let selected = app.selected_state();
    ArticleDetailView {
        query: &selected,
        state: app.detail(),
    }
    .render(frame, detail_area);
}

fn footer_mode(app: &App) -> FooterMode {
    if app.create_form().is_visible() {
        FooterMode::Form
    } else if app.nav().page != Page::Home {
        FooterMode::Page
    } else if app.detail().confirm_delete {
        FooterMode::ConfirmDelete
    } else {
        FooterMode::Home
    }
}
