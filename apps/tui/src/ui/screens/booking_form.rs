use crate::app::forms::BookingField;
use crate::app::App;
use crate::ui::spinner_frame;
use crate::ui::widgets::popup::{fixed_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_booking_form(app: &App, f: &mut Frame<'_>) {
    let form = &app.booking_form;
    let area = fixed_rect(60, 13, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(" New Booking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); BookingField::ALL.len()];
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (index, field) in BookingField::ALL.iter().enumerate() {
        let selected = form.field == *field;
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let prefix = if selected { "> " } else { "  " };
        let cursor = if selected && !form.submitting { "_" } else { "" };
        let line = TextLine::from(vec![
            Span::styled(format!("{prefix}{:<18}", format!("{}:", field.label())), style),
            Span::raw(format!("{}{cursor}", form.value(*field))),
        ]);
        f.render_widget(Paragraph::new(line), chunks[index]);
    }

    let message_area = chunks[BookingField::ALL.len() + 1];
    let help_area = chunks[BookingField::ALL.len() + 2];

    let message = if form.submitting {
        Span::styled(
            format!("{} Saving booking...", spinner_frame(app.animation_counter)),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(error) = &form.error {
        Span::styled(error.as_str(), Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };
    f.render_widget(
        Paragraph::new(TextLine::from(message))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    f.render_widget(
        Paragraph::new("↑/↓ or Tab: field, Enter: submit, Esc: cancel")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        help_area,
    );
}
