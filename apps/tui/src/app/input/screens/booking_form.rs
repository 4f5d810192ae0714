use crate::app::input::helpers::edit_text;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_booking_form_input(app: &mut App, key: KeyCode) {
    if app.booking_form.submitting {
        // A late result still lands through the event channel.
        match key {
            KeyCode::Esc => app.screen = AppScreen::Main,
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Main;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.booking_form.field = app.booking_form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.booking_form.field = app.booking_form.field.prev();
        }
        KeyCode::Enter => app.submit_booking(),
        _ => {
            if edit_text(app.booking_form.current_value_mut(), key) {
                app.booking_form.error = None;
            }
        }
    }
}
