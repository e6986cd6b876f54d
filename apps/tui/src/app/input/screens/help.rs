use crate::app::state::App;
use crossterm::event::KeyCode;

/// Returns true when the key was consumed by the help popup.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::F(1) => {
            app.show_help = !app.show_help;
            true
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            true
        }
        _ => false,
    }
}
