use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::runtime::Handle;

use crate::api::ApiError;
use crate::clipboard::{ClipboardHandler, CopyMethod};
use crate::model::{all_categories, visible_articles, Article, ArticleId};
use crate::sync::{QueryClient, QueryKey, QueryState};
use crate::ui::create::{CreateFormState, CreateIntent, CreateReducer};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::events::AppEvent;
use crate::ui::list::{ListIntent, ListReducer, ListState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{AddressBar, NavIntent, NavReducer, NavState, Page};

/// How long the "Link copied" feedback stays up.
pub const SHARE_FEEDBACK: Duration = Duration::from_secs(2);
/// Delay between a successful publish and the form closing.
pub const CREATE_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    queries: QueryClient,
    runtime: Handle,
    events: Sender<AppEvent>,
    clipboard: Option<ClipboardHandler>,
    address_bar: AddressBar,
    nav: NavState,
    list: ListState,
    detail: DetailState,
    create_form: CreateFormState,
    share_copied_at: Option<Instant>,
    create_succeeded_at: Option<Instant>,
}

impl App {
    pub fn new(
        queries: QueryClient,
        runtime: Handle,
        events: Sender<AppEvent>,
        address_bar: AddressBar,
        nav: NavState,
    ) -> Self {
        let app = Self {
            should_quit: false,
            queries,
            runtime,
            events,
            clipboard: None,
            address_bar,
            nav,
            list: ListState::default(),
            detail: DetailState::default(),
            create_form: CreateFormState::default(),
            share_copied_at: None,
            create_succeeded_at: None,
        };
        app.refresh_visible();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn address_bar(&self) -> &AddressBar {
        &self.address_bar
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn create_form(&self) -> &CreateFormState {
        &self.create_form
    }

    pub fn blogs_state(&self) -> QueryState<Vec<Article>> {
        self.queries.blogs_state()
    }

    pub fn selected_state(&self) -> QueryState<Article> {
        self.queries.blog_state(self.nav.selected_id())
    }

    /// Articles after the category filter, newest first.
    pub fn visible(&self) -> Vec<Article> {
        match self.queries.blogs_state() {
            QueryState::Success { data, .. } => {
                visible_articles(&data, self.list.filter.as_deref())
            }
            _ => Vec::new(),
        }
    }

    /// Distinct tags across the loaded list.
    pub fn categories(&self) -> Vec<String> {
        self.queries
            .blogs_state()
            .data()
            .map(|data| all_categories(data))
            .unwrap_or_default()
    }

    // Navigation

    pub fn navigate(&mut self, page: Page) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Navigate(page));
        self.sync_location();
        self.refresh_visible();
    }

    pub fn select(&mut self, id: ArticleId) {
        if id == 0 {
            return;
        }
        if self.nav.selected != Some(id) {
            self.reset_detail();
        }
        dispatch_mvi!(self, nav, NavReducer, NavIntent::SelectArticle(id));
        self.sync_location();
        self.queries.ensure(QueryKey::Blog(id));
    }

    /// Open the article under the list cursor.
    pub fn open_highlighted(&mut self) {
        let visible = self.visible();
        if let Some(article) = visible.get(self.list.cursor) {
            self.select(article.id);
        }
    }

    fn sync_location(&mut self) {
        self.address_bar.push_state(&self.nav);
    }

    /// "Refetch on mount" for whatever the current page shows.
    fn refresh_visible(&self) {
        if self.nav.page == Page::Home {
            self.queries.ensure(QueryKey::Blogs);
            self.queries.ensure(QueryKey::Blog(self.nav.selected_id()));
        }
    }

    // List

    pub fn move_up(&mut self) {
        let len = self.visible().len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::MoveUp { len });
    }

    pub fn move_down(&mut self) {
        let len = self.visible().len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::MoveDown { len });
    }

    pub fn toggle_filter(&mut self, tag: impl Into<String>) {
        dispatch_mvi!(self, list, ListReducer, ListIntent::ToggleFilter(tag.into()));
    }

    pub fn cycle_filter(&mut self) {
        let categories = self.categories();
        dispatch_mvi!(self, list, ListReducer, ListIntent::CycleFilter(categories));
    }

    pub fn clear_filter(&mut self) {
        dispatch_mvi!(self, list, ListReducer, ListIntent::ClearFilter);
    }

    /// Refetch whichever read on the current page is in the error state.
    pub fn retry(&mut self) {
        if self.nav.page != Page::Home {
            return;
        }
        if self.queries.blogs_state().error().is_some() {
            self.queries.refetch(QueryKey::Blogs);
        }
        let id = self.nav.selected_id();
        if self.queries.blog_state(id).error().is_some() {
            self.queries.refetch(QueryKey::Blog(id));
        }
    }

    // Detail

    pub fn share(&mut self) {
        if self.nav.selected.is_none() {
            return;
        }
        let link = self.address_bar.href();
        let clipboard = self.clipboard.get_or_insert_with(ClipboardHandler::new);
        match clipboard.copy(&link) {
            Ok(method) => {
                if method == CopyMethod::Osc52 {
                    tracing::debug!("Link copied via OSC 52");
                }
                self.mark_link_copied(Instant::now());
            }
            Err(err) => tracing::warn!(error = %err, link = %link, "Failed to copy link"),
        }
    }

    fn mark_link_copied(&mut self, now: Instant) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::LinkCopied);
        self.share_copied_at = Some(now);
    }

    pub fn request_delete(&mut self) {
        if self.nav.selected.is_some() && !self.detail.is_deleting() {
            dispatch_mvi!(self, detail, DetailReducer, DetailIntent::RequestDelete);
        }
    }

    pub fn cancel_delete(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::CancelDelete);
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.nav.selected else {
            return;
        };
        if !self.detail.confirm_delete || self.detail.is_deleting() {
            return;
        }
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::DeleteStarted);

        let queries = self.queries.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = queries.delete(id).await;
            let _ = events.send(AppEvent::DeleteFinished { id, result });
        });
    }

    pub fn on_delete_finished(&mut self, id: ArticleId, result: Result<(), ApiError>) {
        if self.nav.selected != Some(id) {
            return;
        }
        let deleted = result.is_ok();
        if let Err(err) = &result {
            tracing::warn!(id, error = %err, "Delete failed");
        }
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::DeleteFinished(result));
        if deleted {
            dispatch_mvi!(self, nav, NavReducer, NavIntent::ArticleDeleted(id));
            self.reset_detail();
            self.sync_location();
        }
    }

    fn reset_detail(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Reset);
        self.share_copied_at = None;
    }

    // Create form

    pub fn open_create(&mut self) {
        dispatch_mvi!(self, create_form, CreateReducer, CreateIntent::Open);
    }

    pub fn close_create(&mut self) {
        if self
            .create_form
            .form()
            .is_some_and(|form| form.submission.is_pending())
        {
            return;
        }
        dispatch_mvi!(self, create_form, CreateReducer, CreateIntent::Close);
        self.create_succeeded_at = None;
    }

    pub fn form_input(&mut self, intent: CreateIntent) {
        dispatch_mvi!(self, create_form, CreateReducer, intent);
    }

    /// Validate the draft and publish it in the background.
    pub fn submit_create(&mut self) {
        let Some(form) = self.create_form.form() else {
            return;
        };
        if !form.can_submit() {
            return;
        }
        let article = match form.draft.clone().into_new_article(Utc::now()) {
            Ok(article) => article,
            Err(err) => {
                tracing::debug!(error = %err, "Draft rejected");
                return;
            }
        };
        dispatch_mvi!(self, create_form, CreateReducer, CreateIntent::SubmitStarted);

        let queries = self.queries.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = queries.create(&article).await;
            let _ = events.send(AppEvent::CreateFinished(result));
        });
    }

    pub fn on_create_finished(&mut self, result: Result<Article, ApiError>) {
        self.on_create_finished_at(result, Instant::now());
    }

    fn on_create_finished_at(&mut self, result: Result<Article, ApiError>, now: Instant) {
        if !self.create_form.is_visible() {
            return;
        }
        match &result {
            Ok(_) => self.create_succeeded_at = Some(now),
            Err(err) => tracing::warn!(error = %err, "Publish failed"),
        }
        dispatch_mvi!(self, create_form, CreateReducer, CreateIntent::SubmitFinished(result));
    }

    // Ticks and background data

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Expire timed feedback as of `now`.
    pub fn on_tick_at(&mut self, now: Instant) {
        if let Some(copied_at) = self.share_copied_at {
            if now.duration_since(copied_at) >= SHARE_FEEDBACK {
                dispatch_mvi!(self, detail, DetailReducer, DetailIntent::ShareExpired);
                self.share_copied_at = None;
            }
        }
        if let Some(created_at) = self.create_succeeded_at {
            if now.duration_since(created_at) >= CREATE_CLOSE_DELAY {
                dispatch_mvi!(self, create_form, CreateReducer, CreateIntent::Close);
                self.create_succeeded_at = None;
            }
        }
    }

    pub fn on_data_changed(&mut self) {
        let len = self.visible().len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::Clamp { len });
    }
}
