use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, CompareSlot};
use crate::config::debug_enabled;
use crossterm::event::KeyCode;

pub async fn handle_compare_input(app: &mut App, key: KeyCode) {
    let len = app.countries.len();

    match key {
        KeyCode::Esc => app.screen = AppScreen::Main,
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.compare_slot = match app.compare_slot {
                CompareSlot::A => CompareSlot::B,
                CompareSlot::B => CompareSlot::A,
            };
        }
        KeyCode::Up => {
            if len > 0 {
                match app.compare_slot {
                    CompareSlot::A => {
                        app.compare_a_index = wrap_decrement(app.compare_a_index, len);
                    }
                    CompareSlot::B => {
                        app.compare_b_index = wrap_decrement(app.compare_b_index, len);
                    }
                }
            }
        }
        KeyCode::Down => {
            if len > 0 {
                match app.compare_slot {
                    CompareSlot::A => {
                        app.compare_a_index = wrap_increment(app.compare_a_index, len);
                    }
                    CompareSlot::B => {
                        app.compare_b_index = wrap_increment(app.compare_b_index, len);
                    }
                }
            }
        }
        KeyCode::Enter => app.run_comparison(),
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
