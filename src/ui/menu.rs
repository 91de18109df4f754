use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::path::PathBuf;

use super::history::format_attempt_item;
use crate::db::attempt::AttemptRecord;
use crate::loader::quiz_name;

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_menu(
    f: &mut Frame,
    quiz_files: &[PathBuf],
    selected_index: usize,
    attempts: &[AttemptRecord],
    status: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quiz Player")
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let quiz_items: Vec<ListItem> = if quiz_files.is_empty() {
        vec![ListItem::new("No quiz files found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        quiz_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(quiz_name(path)).style(style)
            })
            .collect()
    };

    let quiz_list = List::new(quiz_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select a Quiz"),
    );
    f.render_widget(quiz_list, chunks[1]);

    let attempt_items: Vec<ListItem> = if attempts.is_empty() {
        vec![ListItem::new("No finished attempts yet").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        attempts
            .iter()
            .map(|a| ListItem::new(format_attempt_item(a)))
            .collect()
    };

    let attempt_list = List::new(attempt_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Attempts"),
    );
    f.render_widget(attempt_list, chunks[2]);

    let footer = match status {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        None => Line::from(vec![
            Span::styled("↑/↓", key_style()),
            Span::from(" Navigate  "),
            Span::styled("Enter", key_style()),
            Span::from(" Start  "),
            Span::styled("q", key_style()),
            Span::from(" Quit"),
        ]),
    };
    let help = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
