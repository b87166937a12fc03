//! Title screen: difficulty, wrap mode and the stored best for that pair.

use super::game_common::{centered, create_game_layout, render_status_bar};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tilesnake::display::{score_text, TileDisplay};
use tilesnake::Difficulty;

/// Difficulty ladder with the selected entry highlighted.
fn difficulty_line(selected: Difficulty) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *difficulty == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}", i + 1), style));
    }
    Line::from(spans)
}

pub fn render_title_scene(frame: &mut Frame, area: Rect, display: &TileDisplay) {
    let layout = create_game_layout(frame, area, " Tile Snake ", Color::LightGreen);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let wrap = if display.wrap_enabled { "ON" } else { "OFF" };

    let lines = vec![
        Line::from(Span::styled(
            "TILE SNAKE",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed ", label),
            Span::styled(display.difficulty.name(), value),
        ]),
        difficulty_line(display.difficulty),
        Line::from(""),
        Line::from(vec![
            Span::styled("Wrap  ", label),
            Span::styled(wrap, value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Best  ", label),
            Span::styled(score_text(display.high_score), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Z or Enter",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let text_area = centered(layout.content, 30, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    render_status_bar(
        frame,
        layout.status_bar,
        &[
            ("[Up/Down]", "Speed"),
            ("[Tab]", "Wrap"),
            ("[Z/Enter]", "Start"),
            ("[Q]", "Quit"),
        ],
    );
}
