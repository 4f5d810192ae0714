use crate::app::forms::LoginField;
use crate::app::App;
use crate::ui::spinner_frame;
use crate::ui::widgets::popup::{fixed_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_login(app: &App, f: &mut Frame<'_>) {
    let form = &app.login_form;
    let area = fixed_rect(50, 10, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(" Admin Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, area);

    let [username_area, password_area, _, message_area, help_area] = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

    let field_line = |field: LoginField, label: &str, value: String| {
        let selected = form.field == field;
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let prefix = if selected { "> " } else { "  " };
        let cursor = if selected && !form.submitting { "_" } else { "" };
        TextLine::from(vec![
            Span::styled(format!("{prefix}{label}: "), style),
            Span::raw(format!("{value}{cursor}")),
        ])
    };

    f.render_widget(
        Paragraph::new(field_line(LoginField::Username, "Username", form.username.clone())),
        username_area,
    );
    f.render_widget(
        Paragraph::new(field_line(LoginField::Password, "Password", form.masked_password())),
        password_area,
    );

    let message = if form.submitting {
        Span::styled(
            format!("{} Logging in...", spinner_frame(app.animation_counter)),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(error) = &form.error {
        Span::styled(error.as_str(), Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };
    f.render_widget(
        Paragraph::new(TextLine::from(message)).alignment(Alignment::Center),
        message_area,
    );

    f.render_widget(
        Paragraph::new("Tab: switch field, Enter: log in, Esc: cancel")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        help_area,
    );
}
