use crate::app::state::{AddCountryState, App, AppScreen, FormField};
use crossterm::event::KeyCode;

pub async fn handle_add_country_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            if app.add_state.editing {
                app.add_state.editing = false;
                return;
            }
            app.screen = AppScreen::Main;
        }
        KeyCode::Up => {
            if !app.add_state.editing {
                app.add_state.field = app.add_state.field.prev();
            }
        }
        KeyCode::Down | KeyCode::Tab => {
            if !app.add_state.editing {
                app.add_state.field = app.add_state.field.next();
            }
        }
        KeyCode::Enter => {
            if app.add_state.field == FormField::Submit {
                // Stays on the form: the state is cleared on success so
                // several countries can be entered in a row.
                app.submit_new_country().await;
                return;
            }
            app.add_state.editing = !app.add_state.editing;
        }
        KeyCode::Backspace => {
            if app.add_state.editing {
                pop_char(&mut app.add_state);
            }
        }
        KeyCode::Char(c) => {
            if app.add_state.editing {
                push_char(&mut app.add_state, c);
            }
        }
        _ => {}
    }
}

fn push_char(state: &mut AddCountryState, c: char) {
    match state.field {
        FormField::Name => state.name.push(c),
        FormField::Score(metric) => {
            // Scores only take digits, a decimal point, and a sign;
            // range checks happen in validate()
            if c.is_ascii_digit() || c == '.' || c == '-' {
                state.score_input_mut(metric).push(c);
            }
        }
        FormField::Submit => {}
    }
}

fn pop_char(state: &mut AddCountryState) {
    match state.field {
        FormField::Name => {
            state.name.pop();
        }
        FormField::Score(metric) => {
            state.score_input_mut(metric).pop();
        }
        FormField::Submit => {}
    }
}
