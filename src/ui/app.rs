//! Main TUI application state and logic

use crate::playback::{Command, Playback};
use crate::ui::panes::{self, BarsRenderData, HeaderRenderData, PlayState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

/// Map a key to a playback command
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::NextAlgorithm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Up | KeyCode::Right => Some(Command::SpeedUp),
        KeyCode::Down | KeyCode::Left => Some(Command::SpeedDown),
        _ => None,
    }
}

/// The main application state
pub struct App {
    /// Sort session and playback controls
    pub playback: Playback,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(playback: Playback) -> Self {
        App {
            status_message: format!("Sorting with {}", playback.algorithm()),
            playback,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut next_frame = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.playback.should_quit() {
                break;
            }

            // Wait for input until the next frame is due
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            if Instant::now() >= next_frame {
                self.advance_frame();
                next_frame = Instant::now() + self.playback.frame_interval();
            }
        }

        Ok(())
    }

    /// Pull this frame's steps and update the status line
    pub fn advance_frame(&mut self) {
        let report = self.playback.tick();
        if report.finished {
            let session = self.playback.session();
            self.status_message = format!(
                "{} finished in {} steps",
                session.algorithm(),
                session.steps_taken()
            );
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let session = self.playback.session();

        panes::render_header(
            frame,
            chunks[0],
            HeaderRenderData {
                algorithm: session.algorithm().name(),
                stats: session.stats(),
                steps: session.steps_taken(),
                item_count: session.values().len(),
                steps_per_frame: self.playback.steps_per_frame(),
            },
        );

        panes::render_bars_pane(
            frame,
            chunks[1],
            BarsRenderData {
                values: session.values(),
                highlight: self.playback.highlight(),
                title: session.algorithm().name(),
            },
            session.is_exhausted(),
        );

        panes::render_status_bar(frame, chunks[2], &self.status_message, self.play_state());
    }

    fn play_state(&self) -> PlayState {
        if self.playback.session().is_exhausted() {
            PlayState::Done
        } else if self.playback.is_paused() {
            PlayState::Paused
        } else {
            PlayState::Playing
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(command) = command_for_key(key.code) else {
            return;
        };

        if let Err(e) = self.playback.apply(command) {
            log::error!("{:?} failed: {}", command, e);
            self.status_message = format!("Error: {}", e);
            return;
        }

        self.status_message = match command {
            Command::NextAlgorithm => format!("Switched to {}", self.playback.algorithm()),
            Command::Reset => "Reset with a fresh permutation".to_string(),
            Command::TogglePause if self.playback.is_paused() => "Paused".to_string(),
            Command::TogglePause => "Playing...".to_string(),
            Command::SpeedUp | Command::SpeedDown => {
                format!("Speed: {} steps/frame", self.playback.steps_per_frame())
            }
            Command::Quit => "Quitting".to_string(),
        };
    }
}
