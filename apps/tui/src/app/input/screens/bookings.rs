use crate::app::forms::BookingForm;
use crate::app::input::helpers::{edit_text, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crate::domain::BookingTab;
use crossterm::event::KeyCode;

pub fn handle_bookings_input(app: &mut App, key: KeyCode) {
    let rows = app.visible_row_count();

    match key {
        KeyCode::Left => {
            let index = wrap_decrement(app.bookings.view().tab.index(), BookingTab::ALL.len());
            if let Some(tab) = BookingTab::from_index(index) {
                app.select_tab(tab);
            }
        }
        KeyCode::Right => {
            let index = wrap_increment(app.bookings.view().tab.index(), BookingTab::ALL.len());
            if let Some(tab) = BookingTab::from_index(index) {
                app.select_tab(tab);
            }
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Up => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_row + 1 < rows {
                app.selected_row += 1;
            }
        }
        KeyCode::Home => {
            app.selected_row = 0;
        }
        KeyCode::End => {
            app.selected_row = rows.saturating_sub(1);
        }
        KeyCode::Enter => {
            if app.selected_booking().is_some() {
                app.screen = AppScreen::BookingDetails;
            }
        }
        KeyCode::Char('a') => {
            app.booking_form = BookingForm::default();
            app.screen = AppScreen::NewBooking;
        }
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Esc => {
            app.search_active = false;
            app.set_search(String::new());
        }
        _ => {
            let mut search = app.bookings.view().search.clone();
            if edit_text(&mut search, key) {
                app.set_search(search);
            }
        }
    }
}
