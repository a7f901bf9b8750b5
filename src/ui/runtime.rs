use crate::config::Config;
use crate::converter::ConverterReducer;
use crate::rates::RateLoader;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

/// The single-threaded main loop. Every reducer dispatch happens here;
/// fetch completions arrive as events on the same channel as key input.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(ConverterReducer::new(config.rates.endpoint.clone()));
    let events = EventHandler::new(tick_rate);
    let loader = RateLoader::new(runtime, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(command) = handle_key(&mut app, key) {
                    loader.execute(command);
                }
            }
            Ok(AppEvent::Rates(intent)) => {
                if let Some(command) = app.dispatch(intent) {
                    loader.execute(command);
                }
            }
            Ok(AppEvent::Tick) => {}
            // ratatui resizes its buffers on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
