use crate::app::state::{App, AppScreen};
use crate::domain::Section;
use crossterm::event::KeyCode;

mod booking_details;
mod booking_form;
mod bookings;
mod help;
mod login;
mod main;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Login => login::handle_login_input(app, key),
        AppScreen::NewBooking => booking_form::handle_booking_form_input(app, key),
        AppScreen::BookingDetails => booking_details::handle_booking_details_input(app, key),
        AppScreen::Main => {
            // Typed characters belong to the search line while it is open.
            if app.section == Section::Bookings && app.search_active {
                bookings::handle_search_input(app, key);
                return;
            }
            if main::handle_main_input(app, key) {
                return;
            }
            if app.section == Section::Bookings {
                bookings::handle_bookings_input(app, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{raw, FakeBookingService};
    use crate::api::{ApiAck, BookingService, Credentials, NewBooking, RawBooking};
    use crate::app::AppEvent;
    use crate::domain::BookingTab;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use std::sync::Arc;

    /// Backend whose write calls never answer.
    struct HangingService;

    #[async_trait]
    impl BookingService for HangingService {
        async fn list_bookings(&self) -> Result<Vec<RawBooking>, ApiError> {
            Ok(Vec::new())
        }

        async fn create_booking(&self, _booking: &NewBooking) -> Result<ApiAck, ApiError> {
            std::future::pending().await
        }

        async fn login(&self, _credentials: &Credentials) -> Result<ApiAck, ApiError> {
            std::future::pending().await
        }

        async fn logout(&self) -> Result<ApiAck, ApiError> {
            Ok(ApiAck::ok())
        }
    }

    fn hanging_login() -> App {
        let mut app = App::new(Arc::new(HangingService), 10);
        app.open_section(Section::Bookings);
        app.login_form.username = "admin".to_string();
        app.login_form.password = "password".to_string();
        app.submit_login();
        app
    }

    async fn bookings_app(count: i64) -> App {
        let bookings = (1..=count)
            .map(|id| raw(id, "Customer", "2025-07-05", false, false, None))
            .collect();
        let service = Arc::new(FakeBookingService::with_bookings(bookings));
        let mut app = App::new(service, 10);
        app.open_section(Section::Bookings);
        for c in "admin".chars() {
            dispatch_input(&mut app, KeyCode::Char(c));
        }
        dispatch_input(&mut app, KeyCode::Tab);
        for c in "password".chars() {
            dispatch_input(&mut app, KeyCode::Char(c));
        }
        dispatch_input(&mut app, KeyCode::Enter);
        for _ in 0..2 {
            if let Some(event) = app.next_event().await {
                app.handle_event(event);
            }
        }
        app
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    #[tokio::test]
    async fn login_form_collects_credentials() {
        let app = bookings_app(3).await;
        assert!(app.session.is_authenticated());
        assert_eq!(app.session.username.as_deref(), Some("admin"));
        assert_eq!(app.bookings.records().len(), 3);
    }

    #[tokio::test]
    async fn paging_keys_move_between_pages() {
        let mut app = bookings_app(25).await;

        press(&mut app, &[KeyCode::Char('n'), KeyCode::PageDown, KeyCode::Char('n')]);
        assert_eq!(app.bookings.view().page, 3);

        press(&mut app, &[KeyCode::Char('p')]);
        assert_eq!(app.bookings.view().page, 2);
    }

    #[tokio::test]
    async fn search_keys_edit_the_term_and_reset_page() {
        let mut app = bookings_app(25).await;
        press(&mut app, &[KeyCode::Char('n')]);

        press(&mut app, &[KeyCode::Char('/'), KeyCode::Char('q'), KeyCode::Char('x')]);
        assert!(app.running);
        assert_eq!(app.bookings.view().search, "qx");
        assert_eq!(app.bookings.view().page, 1);

        press(&mut app, &[KeyCode::Backspace, KeyCode::Enter]);
        assert!(!app.search_active);
        assert_eq!(app.bookings.view().search, "q");

        press(&mut app, &[KeyCode::Char('/'), KeyCode::Esc]);
        assert_eq!(app.bookings.view().search, "");
    }

    #[tokio::test]
    async fn arrow_keys_switch_tabs() {
        let mut app = bookings_app(1).await;

        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.bookings.view().tab, BookingTab::Upcoming);

        press(&mut app, &[KeyCode::Left, KeyCode::Left, KeyCode::Left]);
        assert_eq!(app.bookings.view().tab, BookingTab::Cancelled);
    }

    #[tokio::test]
    async fn enter_opens_details_and_esc_returns() {
        let mut app = bookings_app(3).await;

        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.screen, AppScreen::BookingDetails);
        assert_eq!(app.selected_booking().map(|b| b.id), Some(2));

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.screen, AppScreen::Main);
    }

    #[tokio::test]
    async fn help_swallows_keys_until_closed() {
        let mut app = bookings_app(1).await;

        press(&mut app, &[KeyCode::F(1), KeyCode::Char('q')]);
        assert!(app.running);
        assert!(app.show_help);

        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(!app.running);
    }

    #[tokio::test]
    async fn hung_login_still_closes_on_esc() {
        let mut app = hanging_login();
        assert!(app.login_form.submitting);

        press(&mut app, &[KeyCode::Char('x'), KeyCode::Enter]);
        assert_eq!(app.login_form.username, "admin");
        assert_eq!(app.screen, AppScreen::Login);

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.screen, AppScreen::Main);
        assert_eq!(app.section, Section::Dashboard);
        assert!(!app.session.is_authenticated());
    }

    #[tokio::test]
    async fn hung_login_still_quits() {
        let mut app = hanging_login();

        press(&mut app, &[KeyCode::Char('q')]);

        assert!(!app.running);
    }

    #[tokio::test]
    async fn hung_create_can_be_left_and_resolves_late() {
        let mut app = App::new(Arc::new(HangingService), 10);
        app.session.username = Some("admin".to_string());
        app.section = Section::Bookings;
        press(&mut app, &[KeyCode::Char('a')]);
        assert_eq!(app.screen, AppScreen::NewBooking);
        for (index, value) in ["Alice", "9123456780", "a@example.com", "2025-07-06", "15:30"]
            .iter()
            .enumerate()
        {
            if index > 0 {
                press(&mut app, &[KeyCode::Tab]);
            }
            for c in value.chars() {
                press(&mut app, &[KeyCode::Char(c)]);
            }
        }
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.booking_form.submitting);

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.screen, AppScreen::Main);
        assert!(app.running);

        app.handle_event(AppEvent::BookingCreated(Err(ApiError::Status(
            StatusCode::BAD_GATEWAY,
        ))));
        assert!(!app.booking_form.submitting);
        assert!(app.booking_form.error.is_some());
        assert_eq!(app.booking_form.values.name, "Alice");
        assert_eq!(app.screen, AppScreen::Main);
    }
}
