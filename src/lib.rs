pub mod config;
pub mod db;
pub mod input;
pub mod loader;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use input::{handle_quiz_input, handle_results_input};
pub use loader::{get_quiz_files, load_quiz, quiz_name};
pub use models::{AppState, AsyncQuizSession, Question, QuizResult, QuizSet, SessionSnapshot};
pub use session::{Phase, QuizSession};
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_results};
