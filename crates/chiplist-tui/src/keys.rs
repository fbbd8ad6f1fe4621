use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::App;

/// Route a key press. Only text editing and quitting are bound; the dropdown
/// is driven by the mouse.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(c)
        }
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
}

/// Left press clicks. The wheel scrolls the dropdown while the pointer is over it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let over_dropdown = app
        .hits
        .dropdown
        .contains(Position::new(mouse.column, mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown if over_dropdown => app.scroll_dropdown(1),
        MouseEventKind::ScrollUp if over_dropdown => app.scroll_dropdown(-1),
        _ => {}
    }
}
