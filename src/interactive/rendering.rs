//! TUI rendering with ratatui
//!
//! Board, score panel and recent words for the daily puzzle.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Axis, Position};
use crate::dictionary::Lookup;
use crate::engine::DisplayEntry;
use crate::output::formatters::{column_label, score_display, word_case};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Score and words
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let title = format!(
        "🔤 WORD GRID - {}",
        app.session.date().format("%A, %B %-d %Y")
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_span<L: Lookup, K: KeyValueStore>(app: &App<'_, L, K>, pos: Position) -> Span<'static> {
    let view = app.session.cell(pos);
    let (text, mut style) = match (view.letter, app.draft.get(pos)) {
        (Some(letter), _) => (
            char::from(letter),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        (None, Some(letter)) => (
            char::from(letter),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        (None, None) => ('·', Style::default().fg(Color::DarkGray)),
    };

    if pos == app.cursor && app.input_mode == InputMode::Playing {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!(" {text} "), style)
}

fn render_board<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let grid = app.session.grid();
    let label = Style::default().fg(Color::DarkGray);

    let mut header = vec![Span::raw("    ")];
    header.extend((0..grid.width()).map(|x| Span::styled(format!(" {} ", column_label(x)), label)));

    let mut lines = vec![Line::from(header)];
    for y in 0..grid.height() {
        let mut spans = vec![Span::styled(format!("{:>3} ", y + 1), label)];
        spans.extend((0..grid.width()).map(|x| cell_span(app, Position::new(x, y))));
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Score gauge
            Constraint::Percentage(60), // Words
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let score = app.session.total();
    let percent = if app.best == 0 {
        if score > 0 { 100 } else { 0 }
    } else {
        u16::try_from((u64::from(score) * 100 / u64::from(app.best)).min(100)).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!(
            "{} | best today {}",
            score_display(score),
            score_display(app.best)
        ));

    f.render_widget(gauge, area);
}

fn entry_style(entry: &DisplayEntry) -> Style {
    if entry.latest {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if entry.weight > 0.6 {
        Style::default().fg(Color::White)
    } else if entry.weight > 0.3 {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_words<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let entries = app.session.display_entries();
    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        entries
            .iter()
            .map(|entry| {
                ListItem::new(format!("{:<9} +{}", word_case(&entry.word), entry.points))
                    .style(entry_style(entry))
            })
            .collect()
    };

    let words = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", app.session.moves()))
            .borders(Borders::ALL),
    );
    f.render_widget(words, area);
}

fn render_messages<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => {
            let content = app.summary.map_or_else(String::new, |s| {
                if s.new_record {
                    format!("🏆 New record: {}", score_display(s.score))
                } else {
                    format!("Final score {}", score_display(s.score))
                }
            });
            (" Game over | Press 'q' to quit ", content, Color::Green)
        }
        InputMode::Playing => {
            let direction = match app.direction {
                Axis::Row => "→ across",
                Axis::Column => "↓ down",
            };
            let grid = app.session.grid();
            let pending: String = grid
                .positions()
                .filter(|&pos| !grid.is_filled(pos))
                .filter_map(|pos| app.draft.get(pos).map(char::from))
                .collect();
            let content = if pending.is_empty() {
                format!("{direction} | type letters to place them")
            } else {
                format!("{direction} | pending: {pending}")
            };
            (" Type letters | Enter to submit | Esc to clear ", content, Color::Yellow)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<L: Lookup, K: KeyValueStore>(f: &mut Frame, app: &App<'_, L, K>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let cursor = format!(
        "Cell: {}{}",
        column_label(app.cursor.x).to_ascii_lowercase(),
        app.cursor.y + 1
    );
    f.render_widget(Paragraph::new(cursor).alignment(Alignment::Center), chunks[0]);

    let moves = format!(
        "Moves: {} | Words: {}",
        app.session.moves(),
        app.session.latest().len() + app.session.older().len()
    );
    f.render_widget(Paragraph::new(moves).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Finished => "q: Quit",
        InputMode::Playing => "Arrows: Move | Tab: Direction | Ctrl-F: Finish | Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
