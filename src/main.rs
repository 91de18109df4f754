use crossbeam_channel::{Receiver, Sender};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiz_player::db::attempt::{best_attempt, record_attempt, recent_attempts, AttemptRecord};
use quiz_player::db::init_db;
use quiz_player::{
    draw_menu, draw_quit_confirmation, draw_quiz, draw_results, get_quiz_files,
    handle_quiz_input, handle_results_input, load_quiz, logger, quiz_name, AppState, Config,
    QuizResult, QuizSession,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rusqlite::Connection;
use std::io;
use std::path::PathBuf;

const RECENT_ATTEMPTS: usize = 5;

struct ActiveQuiz {
    name: String,
    session: QuizSession,
    best: Option<AttemptRecord>,
}

struct App {
    config: Config,
    db: Option<Connection>,
    quiz_files: Vec<PathBuf>,
    selected_file_index: usize,
    attempts: Vec<AttemptRecord>,
    status: Option<String>,
    active: Option<ActiveQuiz>,
    state: AppState,
    completed_tx: Sender<usize>,
    completed_rx: Receiver<usize>,
}

impl App {
    fn new(config: Config) -> Self {
        let db = match init_db(&config.db_path) {
            Ok(conn) => Some(conn),
            Err(e) => {
                logger::log(&format!(
                    "Attempt history disabled, failed to open {}: {}",
                    config.db_path.display(),
                    e
                ));
                None
            }
        };
        let quiz_files = get_quiz_files(&config.quiz_dir);
        let (completed_tx, completed_rx) = crossbeam_channel::unbounded();

        let mut app = Self {
            config,
            db,
            quiz_files,
            selected_file_index: 0,
            attempts: Vec::new(),
            status: None,
            active: None,
            state: AppState::Menu,
            completed_tx,
            completed_rx,
        };
        app.refresh_attempts();
        app
    }

    fn refresh_attempts(&mut self) {
        let Some(conn) = &self.db else {
            return;
        };
        match recent_attempts(conn, RECENT_ATTEMPTS) {
            Ok(attempts) => self.attempts = attempts,
            Err(e) => logger::log(&format!("Failed to load attempts: {}", e)),
        }
    }

    fn best_for(&self, name: &str) -> Option<AttemptRecord> {
        let conn = self.db.as_ref()?;
        best_attempt(conn, name).ok().flatten()
    }

    fn start_selected_quiz(&mut self) {
        let Some(path) = self.quiz_files.get(self.selected_file_index) else {
            return;
        };
        let name = quiz_name(path);

        let questions = match load_quiz(path) {
            Ok(questions) => questions,
            Err(e) => {
                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                self.status = Some(format!("Could not load {}: {}", name, e));
                return;
            }
        };
        let questions = if self.config.shuffle {
            questions.shuffled(&mut rand::thread_rng())
        } else {
            questions
        };
        logger::log(&format!("Starting quiz {} ({} questions)", name, questions.len()));

        let tx = self.completed_tx.clone();
        let session = QuizSession::new(questions).on_complete(move |score| {
            let _ = tx.send(score);
        });

        self.status = None;
        self.active = Some(ActiveQuiz {
            best: self.best_for(&name),
            name,
            session,
        });
        self.state = AppState::Quiz;
    }

    /// Persists completion notifications delivered by the session callback.
    fn drain_completions(&mut self) {
        while let Ok(score) = self.completed_rx.try_recv() {
            let Some(active) = &self.active else {
                continue;
            };
            let result = QuizResult::new(score, active.session.questions().len());
            logger::log(&format!(
                "Recording attempt for {}: {}/{} ({}%)",
                active.name, result.score, result.total, result.percentage
            ));
            if let Some(conn) = &self.db
                && let Err(e) = record_attempt(conn, &active.name, &result)
            {
                logger::log(&format!("Failed to record attempt: {}", e));
            }
        }
        self.refresh_attempts();
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_file_index = self.selected_file_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_file_index < self.quiz_files.len().saturating_sub(1) {
                    self.selected_file_index += 1;
                }
            }
            KeyCode::Enter => self.start_selected_quiz(),
            KeyCode::Char('q') | KeyCode::Esc => return false,
            _ => {}
        }
        true
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| match app.state {
            AppState::Menu => draw_menu(
                f,
                &app.quiz_files,
                app.selected_file_index,
                &app.attempts,
                app.status.as_deref(),
            ),
            AppState::Quiz => {
                if let Some(active) = &app.active {
                    draw_quiz(f, &active.session, &active.name);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Results => {
                if let Some(active) = &app.active {
                    draw_results(f, &active.session, &active.name, active.best.as_ref());
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }

        match app.state {
            AppState::Menu => {
                if !app.handle_menu_key(key.code) {
                    return Ok(());
                }
            }
            AppState::Quiz => {
                if let Some(active) = &mut app.active {
                    handle_quiz_input(&mut active.session, key, &mut app.state);
                }
                app.drain_completions();
            }
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') => {
                    app.active = None;
                    app.state = AppState::Menu;
                }
                KeyCode::Char('n') | KeyCode::Esc => app.state = AppState::Quiz,
                _ => {}
            },
            AppState::Results => {
                if let Some(active) = &mut app.active {
                    handle_results_input(&mut active.session, key, &mut app.state);
                }
                match app.state {
                    AppState::Menu => app.active = None,
                    AppState::Quiz => {
                        let best = app.active.as_ref().and_then(|a| app.best_for(&a.name));
                        if let Some(active) = &mut app.active {
                            active.best = best;
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_path);
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
