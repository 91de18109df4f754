use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct ResultsLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub review_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Percentage(50),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_results_chunks(area: Rect) -> ResultsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    ResultsLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        review_area: chunks[2],
        footer_area: chunks[3],
    }
}
