//! Shared UI pieces for the title screen and the playfield.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area, inside the outer border
    pub content: Rect,
    /// Controls hint line at the bottom
    pub status_bar: Rect,
}

/// Outer border with a title, split into content and a one-line status bar.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render a controls line from (key, action) pairs.
pub fn render_status_bar(frame: &mut Frame, area: Rect, controls: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

/// Boxed banner centered in `area`, drawn over whatever is below it.
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    lines: Vec<Line<'static>>,
) {
    let width = 24.min(area.width);
    let height = (lines.len() as u16 + 3).min(area.height);
    let banner_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut text = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    text.extend(lines);

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Centered sub-rectangle of at most `width` x `height`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(centered(area, 22, 11), Rect::new(9, 4, 22, 11));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered(area, 22, 11), area);
    }
}
