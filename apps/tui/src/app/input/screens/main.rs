use crate::app::input::helpers::wrap_increment;
use crate::app::state::{App, AppScreen};
use crate::domain::Section;
use crossterm::event::KeyCode;

/// Keys that work in either section. Returns true when the key was used.
pub fn handle_main_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('1') => app.open_section(Section::Dashboard),
        KeyCode::Char('2') => app.open_section(Section::Bookings),
        KeyCode::Tab => {
            let next = wrap_increment(app.section.index(), Section::ALL.len());
            if let Some(section) = Section::from_index(next) {
                app.open_section(section);
            }
        }
        KeyCode::Char('r') => {
            if app.session.is_authenticated() {
                app.status_message = "Refreshing bookings...".to_string();
            }
            app.request_load();
        }
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('l') if !app.session.is_authenticated() => {
            app.login_form.error = None;
            app.screen = AppScreen::Login;
        }
        _ => return false,
    }
    true
}
