use crate::quiz::{QuizState, RoundOutcome};
use crate::ui::notice::render_notice;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &QuizState) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "Guess the Flag",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Tap the flag of", Style::default().fg(DIM_TEXT)),
        Line::styled(
            state.prompted().name(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for (i, country) in state.candidates().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}]  ", i + 1), Style::default().fg(DIM_TEXT)),
            Span::raw(country.flag()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::styled(
        format!("Score: {}", state.score),
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);

    match state.outcome {
        Some(RoundOutcome::Correct) => {
            render_notice(frame, "Correct", &[format!("Your score is {}", state.score)]);
        }
        Some(RoundOutcome::Wrong { tapped }) => {
            render_notice(
                frame,
                "Wrong!",
                &[
                    format!("That's the flag of {}.", tapped.name()),
                    format!("Your score is {}", state.score),
                ],
            );
        }
        None => {}
    }
}
