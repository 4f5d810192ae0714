use crate::app::forms::LoginField;
use crate::app::input::helpers::edit_text;
use crate::app::state::{App, AppScreen};
use crate::domain::Section;
use crossterm::event::KeyCode;

pub fn handle_login_input(app: &mut App, key: KeyCode) {
    if app.login_form.submitting {
        // The request may never answer; leaving must still work.
        match key {
            KeyCode::Esc => close_login(app),
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Esc => close_login(app),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_form.toggle_field();
        }
        KeyCode::Enter => {
            if app.login_form.field == LoginField::Username && app.login_form.password.is_empty() {
                app.login_form.field = LoginField::Password;
            } else {
                app.submit_login();
            }
        }
        _ => {
            edit_text(app.login_form.current_value_mut(), key);
        }
    }
}

fn close_login(app: &mut App) {
    app.login_form.error = None;
    app.screen = AppScreen::Main;
    app.section = Section::Dashboard;
}
