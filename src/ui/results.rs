use crate::db::attempt::AttemptRecord;
use crate::session::QuizSession;
use crate::ui::layout::calculate_results_chunks;
use crate::utils::{progress_bar, truncate_string};
use ratatui::{
    layout::Alignment,
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

pub fn draw_results(
    f: &mut Frame,
    session: &QuizSession,
    quiz_name: &str,
    best: Option<&AttemptRecord>,
) {
    let layout = calculate_results_chunks(f.area());

    let title = Paragraph::new(format!("Quiz Complete - {}", quiz_name))
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut score_text = Text::default();
    if let Some(result) = session.result() {
        let color = match result.percentage {
            80..=100 => Color::Green,
            50..=79 => Color::Yellow,
            _ => Color::Red,
        };
        score_text.push_line(Line::from(Span::styled(
            format!("{}%", result.percentage),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        score_text.push_line(Line::from(progress_bar(result.percentage, 30)));
        score_text.push_line(Line::from(format!(
            "You answered {} of {} questions correctly.",
            result.score, result.total
        )));
        if let Some(best) = best {
            score_text.push_line(Line::from(Span::styled(
                format!("Best: {}% ({}/{})", best.percentage, best.score, best.total),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let mut review = Text::default();
    for (i, question) in session.questions().iter().enumerate() {
        review.push_line(Line::from(format!(
            "{}. {}",
            i + 1,
            truncate_string(&question.prompt, 70)
        )));
        let answer = question
            .options
            .get(question.correct_index)
            .map(String::as_str)
            .unwrap_or("-");
        review.push_line(Line::from(Span::styled(
            format!("   {}", truncate_string(answer, 66)),
            Style::default().fg(Color::Green),
        )));
    }
    let review = Paragraph::new(review)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answer Key"));
    f.render_widget(review, layout.review_area);

    let help_text = Line::from(vec![
        Span::styled("r", key_style()),
        Span::from(" Retry  "),
        Span::styled("m", key_style()),
        Span::from(" Main Menu  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
