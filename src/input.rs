use crate::models::AppState;
use crate::session::QuizSession;
use crossterm::event::{KeyCode, KeyEvent};

/// Maps a key press on the quiz screen to a controller operation.
pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    let option_count = session.current_question().options.len();

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let target = match session.selected_option() {
                Some(selected) if selected > 0 => selected - 1,
                Some(_) => 0,
                None => option_count.saturating_sub(1),
            };
            session.select_option(target);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let target = match session.selected_option() {
                Some(selected) => (selected + 1).min(option_count.saturating_sub(1)),
                None => 0,
            };
            session.select_option(target);
        }
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            if let Some(digit) = c.to_digit(10) {
                session.select_option(digit as usize - 1);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if session.revealed() {
                session.next_question();
                if session.finished() {
                    *app_state = AppState::Results;
                }
            } else {
                session.check_answer();
            }
        }
        _ => {}
    }
}

pub fn handle_results_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Char('r') => {
            session.retry();
            *app_state = AppState::Quiz;
        }
        KeyCode::Char('m') | KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        _ => {}
    }
}
