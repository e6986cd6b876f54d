use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod add_country;
mod compare;
mod explorer;
mod help;
mod main;
mod ranking;

pub async fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.show_help {
        // Everything else is swallowed while the help popup is open
        return;
    }

    match app.screen {
        AppScreen::Main => main::handle_main_input(app, key).await,
        AppScreen::AddCountry => add_country::handle_add_country_input(app, key).await,
        AppScreen::Explorer => explorer::handle_explorer_input(app, key).await,
        AppScreen::Compare => compare::handle_compare_input(app, key).await,
        AppScreen::Ranking => ranking::handle_ranking_input(app, key).await,
    }
}
