use crate::ui::app::MENU_ENTRIES;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, area: Rect, selection: usize) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "PARLOR",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled("three little games", Style::default().fg(DIM_TEXT)),
        Line::from(""),
    ];

    for (i, (_, title, blurb)) in MENU_ENTRIES.iter().enumerate() {
        let selected = i == selection;
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(format!("{}. {}", i + 1, title), title_style),
        ]));
        lines.push(Line::styled(
            format!("     {}", blurb),
            Style::default().fg(DIM_TEXT),
        ));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);
}
