use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{AddCountryState, App, AppScreen};
use crate::config::debug_enabled;
use crossterm::event::KeyCode;

/// Menu entries: Add, Explore, Compare, Ranking.
pub const MENU_LEN: usize = 4;

pub async fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => {
            app.menu_index = wrap_decrement(app.menu_index, MENU_LEN);
        }
        KeyCode::Down => {
            app.menu_index = wrap_increment(app.menu_index, MENU_LEN);
        }
        KeyCode::Enter => activate_menu_entry(app, app.menu_index).await,
        KeyCode::Char('a') => activate_menu_entry(app, 0).await,
        KeyCode::Char('e') => activate_menu_entry(app, 1).await,
        KeyCode::Char('c') => activate_menu_entry(app, 2).await,
        KeyCode::Char('r') => activate_menu_entry(app, 3).await,
        KeyCode::Esc => app.reset(),
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

async fn activate_menu_entry(app: &mut App, index: usize) {
    match index {
        0 => {
            app.add_state = AddCountryState::new();
            app.screen = AppScreen::AddCountry;
        }
        1 => refresh_and_open(app, AppScreen::Explorer).await,
        2 => refresh_and_open(app, AppScreen::Compare).await,
        3 => match app.fetch_ranking().await {
            Ok(()) => app.screen = AppScreen::Ranking,
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] fetch_ranking error: {e:?}");
                }
                app.status_message = format!("Failed to fetch ranking from server: {e}");
            }
        },
        _ => {}
    }
}

async fn refresh_and_open(app: &mut App, screen: AppScreen) {
    match app.refresh_countries().await {
        Ok(()) => app.screen = screen,
        Err(e) => {
            if debug_enabled() {
                eprintln!("[DEBUG] refresh_countries error: {e:?}");
            }
            app.status_message = format!("Failed to fetch countries from server: {e}");
        }
    }
}
