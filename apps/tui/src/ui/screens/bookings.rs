use crate::app::App;
use crate::bookings::Page;
use crate::domain::BookingTab;
use crate::ui::widgets::tables::{scroll_offset, status_color, truncate};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs};
use ratatui::Frame;

pub fn render_bookings(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [tabs_area, search_area, table_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

    render_tabs(app, f, tabs_area);
    render_search(app, f, search_area);

    let page = app.bookings.current_page(&app.today);
    render_table(app, &page, f, table_area);
    render_footer(&page, f, footer_area);
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let counts = app.bookings.tab_counts(&app.today);
    let titles = BookingTab::ALL
        .iter()
        .map(|tab| TextLine::from(format!("{} ({})", tab.label(), counts.get(*tab))))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.bookings.view().tab.index())
        .block(
            Block::default()
                .title(" Reminders ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_search(app: &App, f: &mut Frame<'_>, area: Rect) {
    let search = &app.bookings.view().search;
    let (label_style, cursor) = if app.search_active {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            "_",
        )
    } else {
        (Style::default().fg(Color::Gray), "")
    };

    let hint = if search.is_empty() && !app.search_active {
        "press / to search name, email, phone or date"
    } else {
        ""
    };

    let line = TextLine::from(vec![
        Span::styled(" Search: ", label_style),
        Span::styled(format!("{search}{cursor}"), Style::default().fg(Color::White)),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_table(app: &App, page: &Page<'_>, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    if page.items.is_empty() {
        let message = if !app.bookings.has_loaded() {
            if app.is_loading() {
                "Loading bookings..."
            } else {
                "No bookings loaded. Press r to reload."
            }
        } else if app.bookings.view().search.trim().is_empty() {
            "No bookings in this tab."
        } else {
            "No bookings match the search."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Phone"),
        Cell::from("Email"),
        Cell::from("Date"),
        Cell::from("Slot"),
        Cell::from("Status"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(page.items.len(), max_visible_rows, app.selected_row);

    let rows = page
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, booking)| {
            let status_style = Style::default().fg(status_color(booking.status));
            let style = if index == app.selected_row {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(booking.id.to_string()),
                Cell::from(truncate(&booking.name, 22)),
                Cell::from(booking.phone.clone()),
                Cell::from(truncate(&booking.email, 28)),
                Cell::from(booking.date.clone()),
                Cell::from(booking.slot.clone()),
                Cell::from(Span::styled(booking.status.label(), status_style)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(22),
        Constraint::Length(14),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_footer(page: &Page<'_>, f: &mut Frame<'_>, area: Rect) {
    let text = if page.total_count == 0 {
        "0 bookings".to_string()
    } else if page.items.is_empty() {
        format!("Page {} of {}", page.page, page.total_pages)
    } else {
        let first = (page.page - 1) * page.page_size + 1;
        let last = first + page.items.len() - 1;
        format!(
            "Showing {first}-{last} of {} | Page {} of {}",
            page.total_count, page.page, page.total_pages
        )
    };

    let footer = Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Right);
    f.render_widget(footer, area);
}
