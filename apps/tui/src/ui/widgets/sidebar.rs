use crate::app::App;
use crate::domain::Section;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut lines: Vec<TextLine<'_>> = Section::ALL
        .iter()
        .map(|section| {
            let selected = *section == app.section;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { ">" } else { " " };
            TextLine::from(Span::styled(
                format!("{prefix} {} {}", section.index() + 1, section.label()),
                style,
            ))
        })
        .collect();

    lines.push(TextLine::from(""));
    let session_line = app.session.username.as_deref().map_or_else(
        || Span::styled("Not logged in", Style::default().fg(Color::Gray)),
        |username| Span::styled(format!("Admin: {username}"), Style::default().fg(Color::Green)),
    );
    lines.push(TextLine::from(session_line));

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(sidebar, area);
}
