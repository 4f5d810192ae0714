use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_booking_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
            app.screen = AppScreen::Main;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
