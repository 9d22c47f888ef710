//! Keyboard input dispatch — number keys and a movable tab-bar cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppState;

/// Handle a key event and update app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Direct activation by button number.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.activate_index(index);
        }

        // Cursor over the tab bar.
        KeyCode::Left | KeyCode::Char('h') => app.cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_right(),
        KeyCode::BackTab => app.cursor_left(),
        KeyCode::Tab => app.cursor_right(),

        // Activate the highlighted button.
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),

        _ => {}
    }
}

/// Key bindings help text for the status bar.
pub fn key_hints() -> &'static str {
    " 1-9:activate  ←/→ h/l:move  Enter:select  q:quit"
}
