// Screen renderers and shared widgets

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use crate::domain::Section;
use crate::ui::widgets::sidebar::render_sidebar;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let [title_area, body_area, status_area, shortcuts_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Sidebar + content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .areas(f.area().inner(Margin::new(1, 0)));

    let [sidebar_area, content_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .areas(body_area);

    render_title(app, f, title_area);
    render_sidebar(app, f, sidebar_area);

    match app.section {
        Section::Dashboard => screens::dashboard::render_dashboard(app, f, content_area),
        Section::Bookings => screens::bookings::render_bookings(app, f, content_area),
    }

    render_status(app, f, status_area);
    render_shortcuts(app, f, shortcuts_area);

    match app.screen {
        AppScreen::Main => {}
        AppScreen::Login => screens::login::render_login(app, f),
        AppScreen::NewBooking => screens::booking_form::render_booking_form(app, f),
        AppScreen::BookingDetails => screens::booking_details::render_booking_details(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "AI Sales Agent ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}", app.today),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

/// Spinner frame for the current animation phase.
pub fn spinner_frame(animation_counter: f64) -> &'static str {
    // Four frames per 2*PI cycle
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = ((animation_counter / std::f64::consts::FRAC_PI_2) as usize) % SPINNER.len();
    SPINNER[index]
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut spans = Vec::new();
    if app.is_loading() {
        spans.push(Span::styled(
            format!("{} Loading… ", spinner_frame(app.animation_counter)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if !app.status_message.is_empty() {
        let lowered = app.status_message.to_lowercase();
        let style = if lowered.contains("fail")
            || lowered.contains("could not")
            || lowered.contains("invalid")
            || lowered.contains("unable")
        {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(app.status_message.as_str(), style));
    }

    let status = Paragraph::new(TextLine::from(spans))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let mut pairs = vec![("1/2", "Sections"), ("r", "Reload")];
    if app.section == Section::Bookings && app.session.is_authenticated() {
        pairs.extend([
            ("←/→", "Tabs"),
            ("/", "Search"),
            ("n/p", "Page"),
            ("Enter", "Details"),
            ("a", "New"),
            ("L", "Logout"),
        ]);
    }
    pairs.extend([("F1", "Help"), ("q", "Quit")]);

    let mut spans = Vec::new();
    for (index, (key, label)) in pairs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {label}"), text_style));
    }

    let shortcuts = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(shortcuts, area);
}
