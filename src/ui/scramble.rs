use crate::scramble::ScrambleState;
use crate::ui::notice::render_notice;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &ScrambleState) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            state.root.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Score: {}", state.score),
            Style::default().fg(HEADER_TEXT),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter your word: ", Style::default().fg(DIM_TEXT)),
            Span::styled(
                format!("{}▏", state.input),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
        Line::from(""),
    ];

    // Most recent first, length badge alongside, as the original listed them.
    for word in &state.accepted {
        lines.push(Line::from(vec![
            Span::styled(
                format!("({}) ", word.chars().count()),
                Style::default().fg(DIM_TEXT),
            ),
            Span::styled(word.clone(), Style::default().fg(HEADER_TEXT)),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);

    if let Some(reason) = state.notice {
        render_notice(frame, reason.title(), &[reason.message(&state.root)]);
    }
}
