use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::HttpBlogApi;
use crate::config::Config;
use crate::sync::{QueryClient, SyncConfig};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::nav::AddressBar;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal UI until the user quits.
///
/// Blocks the calling thread; network work runs on `runtime`.
pub fn run(config: &Config, location: &str, runtime: Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let api = Arc::new(HttpBlogApi::new(config.api.base_url.clone()));
    let queries = QueryClient::new(api, SyncConfig::from(config), runtime.clone());
    let changed = events.sender();
    queries.set_listener(Arc::new(move || {
        let _ = changed.send(AppEvent::DataChanged);
    }));

    let (address_bar, nav) = AddressBar::restore(config.ui.link_base.clone(), location);
    tracing::info!(
        base_url = %config.api.base_url,
        location = %address_bar.location(),
        "Starting UI"
    );

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(queries, runtime, events.sender(), address_bar, nav);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::DataChanged) => app.on_data_changed(),
            Ok(AppEvent::CreateFinished(result)) => app.on_create_finished(result),
            Ok(AppEvent::DeleteFinished { id, result }) => app.on_delete_finished(id, result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
