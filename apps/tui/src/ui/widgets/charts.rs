use crate::bookings::Booking;
use crate::domain::BookingStatus;
use crate::ui::widgets::tables::status_color;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

/// Number of bookings in each derived status, in display order.
pub fn status_counts(records: &[Booking]) -> [(BookingStatus, u64); 4] {
    BookingStatus::ALL.map(|status| {
        let count = records.iter().filter(|b| b.status == status).count();
        (status, u64::try_from(count).unwrap_or(u64::MAX))
    })
}

pub fn render_status_barchart(records: &[Booking], f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Bookings by Status")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if records.is_empty() {
        let paragraph = Paragraph::new("No bookings loaded")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let counts = status_counts(records);
    let bars: Vec<Bar<'_>> = counts
        .iter()
        .map(|(status, value)| {
            Bar::default()
                .value(*value)
                .label(TextLine::from(status.label()))
                .style(Style::default().fg(status_color(*status)))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = counts.iter().map(|(_, value)| *value).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(9);

    f.render_widget(chart, area);
}
