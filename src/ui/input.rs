use crate::converter::{Command, ConverterIntent};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key event into intents and dispatch them.
///
/// Returns the command the dispatch produced, if any, so the main loop
/// can hand it to the effect runner.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') {
        app.request_quit();
        return None;
    }

    // Ctrl+U: clear the field entirely (absent text, not empty text).
    if is_ctrl_char(key, 'u') {
        return app.dispatch(ConverterIntent::SetInputText(None));
    }

    match key.code {
        KeyCode::Enter => app.dispatch(ConverterIntent::Reload),
        KeyCode::Backspace => {
            let mut text = app.state().input_text().unwrap_or("").to_string();
            text.pop();
            app.dispatch(ConverterIntent::SetInputText(Some(text)))
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = app.state().input_text().unwrap_or("").to_string();
            text.push(ch);
            app.dispatch(ConverterIntent::SetInputText(Some(text)))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
