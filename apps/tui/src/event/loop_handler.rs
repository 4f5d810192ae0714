use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;
use tracing::info;

use crate::api::{BookingService, Credentials};
use crate::app::session::check_login_ack;
use crate::app::{handle_input, App};
use crate::bookings::{Booking, BookingsViewModel, TabCounts};
use crate::domain::BookingTab;
use crate::ui;

// Event poll timeout
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// What the headless run should print.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub json: bool,
    pub tab: BookingTab,
    pub search: String,
    pub page: usize,
    /// `YYYY-MM-DD`; the local date when absent.
    pub today: Option<String>,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub today: String,
    pub tab: BookingTab,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub counts: TabCounts,
    pub bookings: Vec<Booking>,
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(
    service: &dyn BookingService,
    page_size: usize,
    options: &HeadlessOptions,
) -> Result<()> {
    if let Some(credentials) = &options.credentials {
        check_login_ack(service.login(credentials).await).map_err(|e| eyre!("{e}"))?;
        info!(username = %credentials.username, "headless login succeeded");
    }

    let mut model = BookingsViewModel::new(page_size);
    model.load(service).await.map_err(|e| eyre!("{e}"))?;

    let today = options.today.clone().unwrap_or_else(crate::app::state::today_iso);
    let report = build_headless_report(&model, options, &today);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_headless_text(&report));
    }

    Ok(())
}

pub fn build_headless_report(
    model: &BookingsViewModel,
    options: &HeadlessOptions,
    today: &str,
) -> HeadlessReport {
    let page = model.filtered_and_paged(options.tab, &options.search, options.page, today);

    HeadlessReport {
        today: today.to_string(),
        tab: options.tab,
        search: options.search.trim().to_string(),
        page: page.page,
        page_size: page.page_size,
        total_count: page.total_count,
        total_pages: page.total_pages,
        counts: model.tab_counts(today),
        bookings: page.items.into_iter().cloned().collect(),
    }
}

pub fn render_headless_text(report: &HeadlessReport) -> String {
    let mut out = String::new();

    out.push_str("\nSales Agent Bookings\n");
    out.push_str("====================\n");
    out.push_str(&format!("Today: {}\n", report.today));

    out.push_str("\nTabs:\n");
    for tab in BookingTab::ALL {
        let marker = if tab == report.tab { "*" } else { "-" };
        out.push_str(&format!("{marker} {}: {}\n", tab.label(), report.counts.get(tab)));
    }

    if !report.search.is_empty() {
        out.push_str(&format!("\nSearch: {}\n", report.search));
    }

    out.push_str(&format!(
        "\n{} (page {} of {}, {} matching):\n",
        report.tab.label(),
        report.page,
        report.total_pages,
        report.total_count
    ));
    if report.bookings.is_empty() {
        out.push_str("- (none)\n");
    }
    for booking in &report.bookings {
        out.push_str(&format!(
            "- #{} | {} | {} {} | {} | {}\n",
            booking.id,
            booking.name,
            booking.date,
            booking.slot,
            booking.phone,
            booking.status.as_str()
        ));
    }

    out
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    app.request_load();

    loop {
        // Update animations
        app.update();

        // Apply finished service calls before drawing
        app.drain_events();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Redrawn on the next iteration
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }

    Ok(())
}
