use crate::session::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Builds one line per option, marking the selection and, once revealed,
/// the correct option and a wrong pick.
pub(crate) fn option_lines(session: &QuizSession) -> Vec<Line<'static>> {
    let question = session.current_question();
    let selected = session.selected_option();
    let revealed = session.revealed();

    question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = selected == Some(i);
            let (marker, style) = if revealed && question.is_correct(i) {
                ("✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else if revealed && is_selected {
                ("✗", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            } else if is_selected {
                (">", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                (" ", Style::default())
            };
            Line::from(Span::styled(format!("{} {}. {}", marker, i + 1, option), style))
        })
        .collect()
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, quiz_name: &str) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!(
        "Question {} / {} - {}    Score: {}",
        session.current_index() + 1,
        session.questions().len(),
        quiz_name,
        session.score()
    );
    let header = Paragraph::new(progress)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(Text::from(session.current_question().prompt.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let options = Paragraph::new(option_lines(session))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback = match session.was_correct() {
        Some(true) => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Some(false) => Line::from(Span::styled(
            "Incorrect",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None if session.selected_option().is_none() => Line::from(Span::styled(
            "Pick an option",
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(""),
    };
    let feedback = Paragraph::new(feedback)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);

    let action = if !session.revealed() {
        " Check  "
    } else if session.is_last_question() {
        " See Results  "
    } else {
        " Next Question  "
    };
    let help_text = Line::from(vec![
        Span::styled("↑/↓ 1-9", key_style()),
        Span::from(" Select  "),
        Span::styled("Enter", key_style()),
        Span::from(action),
        Span::styled("Esc", key_style()),
        Span::from(" Quit to Menu"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this attempt? Progress is not saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
