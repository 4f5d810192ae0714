use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::api::BookingService;
use crate::app::actions::{AppActions, AppEvent};
use crate::app::forms::{BookingForm, LoginForm};
use crate::app::session::{check_login_ack, Session};
use crate::bookings::{check_create_ack, BookingsViewModel, LoadOutcome, LoadTicket};
use crate::domain::{BookingTab, Section};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load bookings";
pub const CREATE_FAILED_MESSAGE: &str = "Could not create booking, please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Main,
    Login,
    NewBooking,
    BookingDetails,
}

/// Today's date as the bookings tabs compare it.
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub section: Section,
    pub screen: AppScreen,
    pub session: Session,
    pub bookings: BookingsViewModel,
    pub selected_row: usize,
    pub search_active: bool,
    pub login_form: LoginForm,
    pub booking_form: BookingForm,
    pub status_message: String,
    pub pending_load: Option<LoadTicket>,
    pub today: String,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub actions: AppActions,
    events: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(service: Arc<dyn BookingService>, page_size: usize) -> Self {
        let (actions, events) = AppActions::new(service);
        Self {
            running: true,
            show_help: false,
            section: Section::Dashboard,
            screen: AppScreen::Main,
            session: Session::default(),
            bookings: BookingsViewModel::new(page_size),
            selected_row: 0,
            search_active: false,
            login_form: LoginForm::default(),
            booking_form: BookingForm::default(),
            status_message: String::new(),
            pending_load: None,
            today: today_iso(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            actions,
            events,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Spinner phase, cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        // Past midnight the today/upcoming tabs move with the clock.
        self.today = today_iso();
    }

    pub const fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Applies every background result that has arrived so far.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    /// Waits for the next background result. Used by tests.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events.recv().await
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::BookingsLoaded { ticket, result } => {
                if self.pending_load == Some(ticket) {
                    self.pending_load = None;
                }
                match self.bookings.apply_load(ticket, result) {
                    Ok(LoadOutcome::Applied(count)) => {
                        self.clamp_selection();
                        self.status_message = format!("Loaded {count} bookings");
                    }
                    Ok(LoadOutcome::Stale) => {}
                    Err(_) => {
                        self.status_message = LOAD_FAILED_MESSAGE.to_string();
                    }
                }
            }
            AppEvent::BookingCreated(result) => {
                self.booking_form.submitting = false;
                match check_create_ack(result) {
                    Ok(()) => {
                        self.booking_form = BookingForm::default();
                        self.screen = AppScreen::Main;
                        self.status_message = "Booking created, refreshing...".to_string();
                        self.request_load();
                    }
                    Err(_) => {
                        // Values stay in the form so the user can resubmit.
                        self.booking_form.error = Some(CREATE_FAILED_MESSAGE.to_string());
                        self.status_message = CREATE_FAILED_MESSAGE.to_string();
                    }
                }
            }
            AppEvent::LoginFinished(result) => {
                self.login_form.submitting = false;
                self.login_form.password.clear();
                match check_login_ack(result) {
                    Ok(()) => {
                        let username = self.login_form.username.trim().to_string();
                        info!(%username, "admin logged in");
                        self.session.username = Some(username);
                        self.login_form.error = None;
                        self.screen = AppScreen::Main;
                        self.section = Section::Bookings;
                        self.status_message = "Logged in".to_string();
                        self.request_load();
                    }
                    Err(e) => {
                        self.login_form.error = Some(e.to_string());
                        self.status_message = e.to_string();
                    }
                }
            }
            AppEvent::LoggedOut(result) => {
                if let Err(e) = result {
                    warn!(error = %e, "logout request failed, local session already cleared");
                }
            }
        }
    }

    /// Starts a background reload; a newer request supersedes this one.
    pub fn request_load(&mut self) {
        if !self.session.is_authenticated() {
            self.status_message = "Log in to load bookings".to_string();
            return;
        }
        let ticket = self.bookings.begin_load();
        self.pending_load = Some(ticket);
        self.actions.spawn_load(ticket);
    }

    pub fn submit_login(&mut self) {
        if self.login_form.submitting {
            return;
        }
        if !self.login_form.is_complete() {
            self.login_form.error = Some("Enter a username and password".to_string());
            return;
        }
        self.login_form.submitting = true;
        self.login_form.error = None;
        self.status_message = "Logging in...".to_string();
        self.actions.spawn_login(self.login_form.credentials());
    }

    pub fn submit_booking(&mut self) {
        if self.booking_form.submitting {
            return;
        }
        if let Some(field) = self.booking_form.missing_field() {
            self.booking_form.field = field;
            self.booking_form.error = Some(format!("{} is required", field.label()));
            return;
        }
        self.booking_form.submitting = true;
        self.booking_form.error = None;
        self.status_message = "Submitting booking...".to_string();
        self.actions.spawn_create(self.booking_form.candidate());
    }

    /// Clears the local session right away; the server call is best-effort.
    pub fn logout(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        self.session = Session::default();
        self.bookings.clear();
        self.pending_load = None;
        self.selected_row = 0;
        self.search_active = false;
        self.screen = AppScreen::Main;
        self.section = Section::Dashboard;
        self.status_message = "Logged out".to_string();
        self.actions.spawn_logout();
    }

    pub fn open_section(&mut self, section: Section) {
        self.section = section;
        self.search_active = false;
        if section == Section::Bookings && !self.session.is_authenticated() {
            self.login_form.error = None;
            self.screen = AppScreen::Login;
        } else {
            self.screen = AppScreen::Main;
        }
    }

    pub fn select_tab(&mut self, tab: BookingTab) {
        self.bookings.set_tab(tab);
        self.selected_row = 0;
    }

    pub fn set_search(&mut self, search: String) {
        self.bookings.set_search(search);
        self.selected_row = 0;
    }

    pub fn next_page(&mut self) {
        self.bookings.next_page(&self.today);
        self.selected_row = 0;
    }

    pub fn prev_page(&mut self) {
        self.bookings.prev_page();
        self.selected_row = 0;
    }

    pub fn visible_row_count(&self) -> usize {
        self.bookings.current_page(&self.today).items.len()
    }

    pub fn selected_booking(&self) -> Option<&crate::bookings::Booking> {
        self.bookings
            .current_page(&self.today)
            .items
            .get(self.selected_row)
            .copied()
    }

    fn clamp_selection(&mut self) {
        let rows = self.visible_row_count();
        if self.selected_row >= rows {
            self.selected_row = rows.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{raw, FakeBookingService};
    use crate::api::ApiAck;
    use crate::app::forms::BookingField;
    use crate::error::ApiError;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn app_with(service: FakeBookingService) -> (App, Arc<FakeBookingService>) {
        let service = Arc::new(service);
        let app = App::new(service.clone(), 10);
        (app, service)
    }

    async fn settle(app: &mut App) {
        let event = app.next_event().await;
        if let Some(event) = event {
            app.handle_event(event);
        }
    }

    async fn logged_in(service: FakeBookingService) -> (App, Arc<FakeBookingService>) {
        let (mut app, service) = app_with(service);
        app.login_form.username = "admin".to_string();
        app.login_form.password = "password".to_string();
        app.submit_login();
        settle(&mut app).await; // login
        settle(&mut app).await; // first load
        (app, service)
    }

    fn fill_form(app: &mut App) {
        app.booking_form.values.name = "Alice Smith".to_string();
        app.booking_form.values.phone = "9123456780".to_string();
        app.booking_form.values.email = "alice@example.com".to_string();
        app.booking_form.values.date = "2025-07-06".to_string();
        app.booking_form.values.slot = "15:30".to_string();
    }

    #[tokio::test]
    async fn login_loads_bookings() {
        let (app, service) =
            logged_in(FakeBookingService::with_bookings(vec![raw(1, "A", "2025-07-05", false, false, None)])).await;

        assert!(app.session.is_authenticated());
        assert_eq!(app.section, Section::Bookings);
        assert_eq!(app.bookings.records().len(), 1);
        assert!(!app.is_loading());
        assert!(app.login_form.password.is_empty());
        assert_eq!(service.list_calls(), 1);
    }

    #[tokio::test]
    async fn failed_login_keeps_username_and_clears_password() {
        let fake = FakeBookingService::with_bookings(Vec::new());
        fake.set_login_ack(Some(ApiAck::rejected("Invalid credentials")));
        let (mut app, service) = app_with(fake);
        app.login_form.username = "admin".to_string();
        app.login_form.password = "wrong".to_string();

        app.submit_login();
        settle(&mut app).await;

        assert!(!app.session.is_authenticated());
        assert_eq!(app.login_form.username, "admin");
        assert!(app.login_form.password.is_empty());
        assert_eq!(app.login_form.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(service.list_calls(), 0);
    }

    #[tokio::test]
    async fn incomplete_login_is_not_sent() {
        let (mut app, _service) = app_with(FakeBookingService::with_bookings(Vec::new()));
        app.login_form.username = "admin".to_string();

        app.submit_login();

        assert!(!app.login_form.submitting);
        assert!(app.login_form.error.is_some());
    }

    #[tokio::test]
    async fn create_failure_keeps_form_values() {
        let (mut app, service) =
            logged_in(FakeBookingService::with_bookings(vec![raw(1, "A", "2025-07-05", false, false, None)])).await;
        service.set_create_ack(Some(ApiAck::rejected("slot taken")));
        app.screen = AppScreen::NewBooking;
        fill_form(&mut app);

        app.submit_booking();
        settle(&mut app).await;

        assert_eq!(app.screen, AppScreen::NewBooking);
        assert_eq!(app.booking_form.values.name, "Alice Smith");
        assert_eq!(app.booking_form.error.as_deref(), Some(CREATE_FAILED_MESSAGE));
        assert_eq!(app.bookings.records().len(), 1);
        assert_eq!(service.list_calls(), 1);
    }

    #[tokio::test]
    async fn create_success_closes_form_and_reloads() {
        let (mut app, service) =
            logged_in(FakeBookingService::with_bookings(vec![raw(1, "A", "2025-07-05", false, false, None)])).await;
        app.screen = AppScreen::NewBooking;
        fill_form(&mut app);

        app.submit_booking();
        settle(&mut app).await; // created
        assert!(app.is_loading());
        settle(&mut app).await; // reload

        assert_eq!(app.screen, AppScreen::Main);
        assert!(app.booking_form.values.name.is_empty());
        assert_eq!(app.bookings.records().len(), 2);
        assert_eq!(service.list_calls(), 2);
    }

    #[tokio::test]
    async fn incomplete_booking_focuses_missing_field() {
        let (mut app, service) = logged_in(FakeBookingService::with_bookings(Vec::new())).await;
        app.booking_form.values.name = "Alice".to_string();

        app.submit_booking();

        assert!(!app.booking_form.submitting);
        assert_eq!(app.booking_form.field, BookingField::Phone);
        assert!(service.created().is_empty());
    }

    #[tokio::test]
    async fn load_failure_keeps_records_and_reports() {
        let (mut app, service) = logged_in(FakeBookingService::with_bookings(vec![
            raw(1, "A", "2025-07-05", false, false, None),
            raw(2, "B", "2025-07-05", false, false, None),
        ]))
        .await;
        service.fail_list(true);

        app.request_load();
        settle(&mut app).await;

        assert_eq!(app.bookings.records().len(), 2);
        assert_eq!(app.status_message, LOAD_FAILED_MESSAGE);
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn superseded_load_is_ignored() {
        let (mut app, _service) = logged_in(FakeBookingService::with_bookings(Vec::new())).await;
        let old = app.bookings.begin_load();
        let newest = app.bookings.begin_load();
        app.pending_load = Some(newest);

        app.handle_event(AppEvent::BookingsLoaded {
            ticket: newest,
            result: Ok(vec![raw(5, "New", "2025-07-05", false, false, None)]),
        });
        app.handle_event(AppEvent::BookingsLoaded {
            ticket: old,
            result: Err(ApiError::Status(StatusCode::GATEWAY_TIMEOUT)),
        });

        assert_eq!(app.bookings.records().len(), 1);
        assert_eq!(app.status_message, "Loaded 1 bookings");
    }

    #[tokio::test]
    async fn logout_clears_records_and_session() {
        let (mut app, _service) =
            logged_in(FakeBookingService::with_bookings(vec![raw(1, "A", "2025-07-05", false, false, None)])).await;

        app.logout();
        settle(&mut app).await;

        assert!(!app.session.is_authenticated());
        assert!(app.bookings.records().is_empty());
        assert_eq!(app.section, Section::Dashboard);
    }

    #[tokio::test]
    async fn bookings_section_requires_login() {
        let (mut app, _service) = app_with(FakeBookingService::with_bookings(Vec::new()));

        app.open_section(Section::Bookings);

        assert_eq!(app.screen, AppScreen::Login);
        app.request_load();
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn tab_and_search_changes_reset_page_and_selection() {
        let bookings = (1..=25)
            .map(|id| raw(id, "Customer", "2025-07-05", false, false, None))
            .collect();
        let (mut app, _service) = logged_in(FakeBookingService::with_bookings(bookings)).await;

        app.next_page();
        app.selected_row = 4;
        app.select_tab(BookingTab::Upcoming);
        assert_eq!(app.bookings.view().page, 1);
        assert_eq!(app.selected_row, 0);

        app.next_page();
        app.set_search("cust".to_string());
        assert_eq!(app.bookings.view().page, 1);
    }
}
