use crate::app::App;
use crate::ui::widgets::popup::{fixed_rect, ClearWidget};
use crate::ui::widgets::tables::status_color;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_booking_details(app: &App, f: &mut Frame<'_>) {
    let Some(booking) = app.selected_booking() else {
        return;
    };

    let area = fixed_rect(60, 16, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(format!("Booking #{}: {}", booking.id, booking.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let label = Style::default().fg(Color::Gray);
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let mut lines = vec![
        TextLine::from(vec![Span::styled("Name:     ", label), Span::raw(booking.name.as_str())]),
        TextLine::from(vec![Span::styled("Phone:    ", label), Span::raw(booking.phone.as_str())]),
        TextLine::from(vec![Span::styled("Email:    ", label), Span::raw(booking.email.as_str())]),
        TextLine::from(vec![
            Span::styled("When:     ", label),
            Span::raw(format!("{} {}", booking.date, booking.slot)),
        ]),
        TextLine::from(vec![
            Span::styled("Status:   ", label),
            Span::styled(
                booking.status.label(),
                Style::default()
                    .fg(status_color(booking.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Reminder: ", label),
            Span::raw(yes_no(booking.reminder_sent)),
            Span::styled("   Feedback: ", label),
            Span::raw(yes_no(booking.feedback_sent)),
        ]),
    ];

    if let Some(stored) = booking.stored_status.filter(|stored| *stored != booking.status) {
        lines.push(TextLine::from(Span::styled(
            format!("Stored status: {}", stored.label()),
            label,
        )));
    }

    if let Some(notes) = booking.notes.as_deref().filter(|notes| !notes.trim().is_empty()) {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled("Notes:", label)));
        lines.push(TextLine::from(notes));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Esc: Back",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
