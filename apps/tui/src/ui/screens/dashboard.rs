use crate::app::App;
use crate::domain::BookingTab;
use crate::ui::widgets::charts::render_status_barchart;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const KPI_COLORS: [Color; 5] = [
    Color::White,
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Red,
];

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    if !app.session.is_authenticated() {
        let paragraph = Paragraph::new(vec![
            TextLine::from(""),
            TextLine::from("Log in to see booking statistics."),
            TextLine::from(vec![
                Span::raw("Press "),
                Span::styled(
                    "2",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" or "),
                Span::styled(
                    "l",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to log in."),
            ]),
        ])
        .block(
            Block::default()
                .title(" Dashboard ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let [kpi_area, chart_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .areas(area);

    render_kpis(app, f, kpi_area);
    render_status_barchart(app.bookings.records(), f, chart_area);
}

fn render_kpis(app: &App, f: &mut Frame<'_>, area: Rect) {
    let counts = app.bookings.tab_counts(&app.today);
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for ((tab, color), box_area) in BookingTab::ALL.iter().zip(KPI_COLORS).zip(boxes.iter()) {
        let value = if app.bookings.has_loaded() {
            counts.get(*tab).to_string()
        } else {
            "-".to_string()
        };
        let kpi = Paragraph::new(vec![
            TextLine::from(""),
            TextLine::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .title(format!(" {} ", tab.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center);
        f.render_widget(kpi, *box_area);
    }
}
