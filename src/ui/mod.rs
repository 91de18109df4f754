mod history;
pub mod layout;
mod menu;
mod quiz;
mod results;

pub use history::{format_attempt_date, format_attempt_item};
pub use layout::{calculate_quiz_chunks, calculate_results_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use results::draw_results;
