use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{filter_country_indices, App, AppScreen};
use crate::config::debug_enabled;
use crossterm::event::KeyCode;

pub async fn handle_explorer_input(app: &mut App, key: KeyCode) {
    if app.explorer_searching {
        handle_filter_input(app, key);
        return;
    }

    let visible = filter_country_indices(&app.countries, &app.explorer_filter).len();

    match key {
        KeyCode::Esc => {
            if app.explorer_filter.is_empty() {
                app.screen = AppScreen::Main;
            } else {
                app.explorer_filter.clear();
                app.explorer_index = 0;
            }
        }
        KeyCode::Up => {
            if visible > 0 {
                app.explorer_index = wrap_decrement(app.explorer_index, visible);
            }
        }
        KeyCode::Down => {
            if visible > 0 {
                app.explorer_index = wrap_increment(app.explorer_index, visible);
            }
        }
        KeyCode::PageUp => {
            app.explorer_index = app.explorer_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            if visible > 0 {
                app.explorer_index = (app.explorer_index + 5).min(visible - 1);
            }
        }
        KeyCode::Home => app.explorer_index = 0,
        KeyCode::End => {
            if visible > 0 {
                app.explorer_index = visible - 1;
            }
        }
        KeyCode::Char('/') => {
            app.explorer_searching = true;
        }
        KeyCode::Char('r') => {
            if let Err(e) = app.refresh_countries().await {
                if debug_enabled() {
                    eprintln!("[DEBUG] refresh_countries error: {e:?}");
                }
                app.status_message = format!("Failed to fetch countries from server: {e}");
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.explorer_searching = false;
            app.explorer_filter.clear();
            app.explorer_index = 0;
        }
        KeyCode::Enter => {
            // Keep the filter applied, back to list navigation
            app.explorer_searching = false;
        }
        KeyCode::Backspace => {
            app.explorer_filter.pop();
            app.explorer_index = 0;
        }
        KeyCode::Char(c) => {
            app.explorer_filter.push(c);
            app.explorer_index = 0;
        }
        _ => {}
    }
}
