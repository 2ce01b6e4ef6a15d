//! Layout and styling helpers shared by the screens

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Standard 3-section screen layout (title, content, help)
///
/// Title and help are 3 rows each; content takes the rest.
pub fn render_screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Content
        Constraint::Length(3), // Help
    ])
    .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Centered title with cyan borders
pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(widget, area);
}

/// Help bar built from (key, description) pairs, e.g. `[Enter] Next`
pub fn render_help(frame: &mut Frame, area: Rect, items: &[(&str, &str)]) {
    let spans: Vec<Span> = items
        .iter()
        .map(|(key, desc)| Span::raw(format!("[{}] {}  ", key, desc)))
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Rectangle of the given percentage size centered within `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Fixed-height band vertically centered within `area`
pub fn centered_band(height: u16, area: Rect) -> Rect {
    Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area)[0]
}

/// Heading style used for screen captions
pub fn heading_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Prefix and style for a list entry
///
/// Selected entries get a `> ` prefix and yellow bold styling.
pub fn selection_style(is_selected: bool) -> (String, Style) {
    let prefix = if is_selected {
        "> ".to_string()
    } else {
        "  ".to_string()
    };
    let style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    (prefix, style)
}
