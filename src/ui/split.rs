use crate::split::{format_amount, per_person, total_with_tip, SplitField, SplitState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &SplitState) {
    let total = total_with_tip(state.amount(), state.tip_fraction());
    let share = per_person(total, state.people);

    let amount_display = if state.amount_input.is_empty() {
        "0".to_string()
    } else {
        state.amount_input.clone()
    };
    let tip_display = format!("{:.0}%", state.tip_fraction() * 100.0);

    let lines = vec![
        Line::from(""),
        Line::styled(
            "WeSplit",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        field_line("Amount", &amount_display, state.focus == SplitField::Amount),
        Line::from(""),
        field_line(
            "People",
            &format!("{} people", state.people),
            state.focus == SplitField::People,
        ),
        Line::from(""),
        field_line("Tip", &tip_display, state.focus == SplitField::Tip),
        Line::from(""),
        Line::styled("─".repeat(28), Style::default().fg(GLOBAL_BORDER)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total with tip  ", Style::default().fg(DIM_TEXT)),
            Span::styled(
                format_amount(total),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Per person      ", Style::default().fg(DIM_TEXT)),
            Span::styled(
                format_amount(share),
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(ACCENT)),
        Span::styled(format!("{:<8}", label), Style::default().fg(DIM_TEXT)),
        Span::styled(format!("[ {} ]", value), value_style),
    ])
}
