use crate::config::Config;
use crate::source::Fetcher;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the TUI until the user quits.
///
/// The fetch is spawned on `runtime` once, right after the list is created;
/// its result comes back through the event channel like any other event.
pub fn run(config: &Config, fetcher: Fetcher, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(&config.ui);
    let events = EventHandler::new(tick_rate);

    let loaded_tx = events.sender();
    runtime.spawn(async move {
        let result = fetcher.fetch().await.map_err(|err| {
            tracing::warn!(kind = err.kind(), error = %err, "initial fetch failed");
            err.to_string()
        });
        let _ = loaded_tx.send(AppEvent::RestaurantsLoaded(result));
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick | AppEvent::Resize) => {}
            Ok(AppEvent::RestaurantsLoaded(result)) => app.on_restaurants_loaded(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
