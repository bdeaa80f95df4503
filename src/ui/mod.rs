//! Terminal UI shell.
//!
//! The run loop owns the terminal, pulls events off the handler thread,
//! and routes keys to the [`App`] shell, which dispatches MVI intents to
//! the per-app reducers.

pub mod app;
mod events;
mod footer;
mod menu;
mod notice;
mod quiz;
mod scramble;
mod split;
mod terminal_guard;
pub mod theme;

pub use app::{App, Screen};

use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::footer::Footer;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use std::io;
use std::time::Duration;

pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    match app.screen() {
        Screen::Menu => menu::draw(frame, chunks[0], app.menu_selection()),
        Screen::Quiz => quiz::draw(frame, chunks[0], app.quiz()),
        Screen::Split => split::draw(frame, chunks[0], app.split()),
        Screen::Scramble => scramble::draw(frame, chunks[0], app.scramble()),
    }

    let footer = Footer::new(app.screen());
    frame.render_widget(footer.widget(chunks[1]), chunks[1]);
}
