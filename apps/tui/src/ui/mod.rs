// UI module for country-prospector
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Main => screens::main::render_main(app, f),
        AppScreen::AddCountry => screens::add_country::render_add_country(app, f),
        AppScreen::Explorer => screens::explorer::render_explorer(app, f),
        AppScreen::Compare => screens::compare::render_compare(app, f),
        AppScreen::Ranking => screens::ranking::render_ranking(app, f),
    }

    // The help popup overlays whichever screen is active
    if app.show_help {
        screens::main::render_help_popup(f);
    }
}
