use crate::domain::BookingStatus;
use ratatui::style::Color;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

pub const fn status_color(status: BookingStatus) -> Color {
    match status {
        BookingStatus::Scheduled => Color::Cyan,
        BookingStatus::Confirmed => Color::Yellow,
        BookingStatus::Completed => Color::Green,
        BookingStatus::Cancelled => Color::Red,
    }
}

/// Cuts `value` to at most `max` characters, marking the cut with `…`.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
