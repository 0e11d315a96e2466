//! TUI application state and logic

use crate::core::{Axis, Position};
use crate::dictionary::Lookup;
use crate::engine::{Draft, FinishSummary, Session};
use crate::output::formatters::word_case;
use crate::storage::{HighScoreStore, KeyValueStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, L: Lookup, K: KeyValueStore> {
    pub session: Session<'a, L>,
    pub store: HighScoreStore<K>,
    pub draft: Draft,
    pub cursor: Position,
    pub direction: Axis,
    pub best: u32,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub summary: Option<FinishSummary>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, L: Lookup, K: KeyValueStore> App<'a, L, K> {
    #[must_use]
    pub fn new(session: Session<'a, L>, store: HighScoreStore<K>) -> Self {
        let best = store.get(session.date());

        Self {
            session,
            store,
            draft: Draft::new(),
            cursor: Position::new(0, 0),
            direction: Axis::Row,
            best,
            messages: vec![
                Message {
                    text: "Place letters in one row or column, then press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Every new word of 3+ letters scores a point per letter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Playing,
            summary: None,
            should_quit: false,
        }
    }

    /// Move the cursor, clamped to the board
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let grid = self.session.grid();
        let x = self.cursor.x.saturating_add_signed(dx).min(grid.width() - 1);
        let y = self.cursor.y.saturating_add_signed(dy).min(grid.height() - 1);
        self.cursor = Position::new(x, y);
    }

    fn advance(&mut self, forward: bool) {
        let step: isize = if forward { 1 } else { -1 };
        match self.direction {
            Axis::Row => self.move_cursor(step, 0),
            Axis::Column => self.move_cursor(0, step),
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        };
    }

    /// Type a letter into the cell under the cursor
    ///
    /// Locked cells cannot be edited; the cursor just moves past them.
    pub fn type_letter(&mut self, c: char) {
        if self.session.cell(self.cursor).locked {
            self.advance(true);
            return;
        }
        if self.draft.set(self.cursor, c).is_ok() {
            self.advance(true);
        }
    }

    /// Remove the edit under the cursor, or step back and remove that one
    pub fn backspace(&mut self) {
        if self.draft.get(self.cursor).is_none() {
            self.advance(false);
        }
        self.draft.clear(self.cursor);
    }

    pub fn clear_draft(&mut self) {
        self.draft.reset();
    }

    /// Submit the pending edits as a move
    pub fn submit(&mut self) {
        if self.draft.is_empty() {
            self.add_message("Type some letters first.", MessageStyle::Error);
            return;
        }

        let candidate = self.draft.assemble(self.session.grid());
        match self.session.submit(&candidate) {
            Ok(entries) => {
                self.draft.reset();
                if entries.is_empty() {
                    self.add_message("Locked in. No new words.", MessageStyle::Info);
                } else {
                    let words: Vec<String> = entries
                        .iter()
                        .map(|e| format!("{} +{}", word_case(&e.word), e.points))
                        .collect();
                    self.add_message(&words.join(", "), MessageStyle::Success);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Record the score and stop accepting moves
    pub fn finish(&mut self) {
        match self.session.finish(&mut self.store) {
            Ok(summary) => {
                self.best = summary.best;
                self.summary = Some(summary);
                self.input_mode = InputMode::Finished;
                let text = if summary.new_record {
                    format!("🏆 New best for today: {}!", summary.score)
                } else {
                    format!("Final score {} (best today {})", summary.score, summary.best)
                };
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<L: Lookup, K: KeyValueStore>(app: App<'_, L, K>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, L: Lookup, K: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, L, K>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.should_quit = true,
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char('c' | 'q') if ctrl => app.should_quit = true,
                    KeyCode::Char('f') if ctrl => app.finish(),
                    KeyCode::Char(c) => app.type_letter(c),
                    KeyCode::Left => app.move_cursor(-1, 0),
                    KeyCode::Right => app.move_cursor(1, 0),
                    KeyCode::Up => app.move_cursor(0, -1),
                    KeyCode::Down => app.move_cursor(0, 1),
                    KeyCode::Tab => app.toggle_direction(),
                    KeyCode::Backspace | KeyCode::Delete => app.backspace(),
                    KeyCode::Esc => app.clear_draft(),
                    KeyCode::Enter => app.submit(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
