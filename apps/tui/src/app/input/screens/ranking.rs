use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crate::config::debug_enabled;
use crossterm::event::KeyCode;

pub async fn handle_ranking_input(app: &mut App, key: KeyCode) {
    let len = app.ranking.len();

    match key {
        KeyCode::Esc => app.screen = AppScreen::Main,
        KeyCode::Up => {
            if len > 0 {
                app.ranking_index = wrap_decrement(app.ranking_index, len);
            }
        }
        KeyCode::Down => {
            if len > 0 {
                app.ranking_index = wrap_increment(app.ranking_index, len);
            }
        }
        KeyCode::Home => app.ranking_index = 0,
        KeyCode::End => {
            if len > 0 {
                app.ranking_index = len - 1;
            }
        }
        KeyCode::Char('r') => {
            if let Err(e) = app.fetch_ranking().await {
                if debug_enabled() {
                    eprintln!("[DEBUG] fetch_ranking error: {e:?}");
                }
                app.status_message = format!("Failed to fetch ranking from server: {e}");
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
