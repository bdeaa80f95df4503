//! Centered dismissible notice popup.

use crate::ui::theme::{DIM_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MIN_WIDTH: u16 = 30;

/// Render a modal notice over the current screen: a title, message lines,
/// and a dismiss hint.
pub fn render_notice(frame: &mut Frame<'_>, title: &str, lines: &[String]) {
    let area = frame.area();

    let content_width = lines
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(title.chars().count() + 2))
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 4).max(MIN_WIDTH).min(area.width);
    let height = (lines.len() as u16 + 4).min(area.height);

    let popup = centered(area, width, height);
    frame.render_widget(Clear, popup);

    let mut text: Vec<Line> = lines.iter().map(|line| Line::from(line.clone())).collect();
    text.push(Line::from(""));
    text.push(Line::styled(
        "Press Enter to continue",
        Style::default().fg(DIM_TEXT),
    ));

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
