use crate::logger::DEFAULT_LOG_FILE;
use std::path::PathBuf;

pub const DEFAULT_QUIZ_DIR: &str = "quizzes";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub quiz_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub shuffle: bool,
}

fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\quiz-player")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/quiz-player")
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Reads `QUIZ_PLAYER_DIR`, `QUIZ_PLAYER_DB`, `QUIZ_PLAYER_LOG` and `QUIZ_PLAYER_SHUFFLE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            quiz_dir: non_empty("QUIZ_PLAYER_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_QUIZ_DIR)),
            db_path: non_empty("QUIZ_PLAYER_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| get_data_dir().join("quiz.db")),
            log_path: non_empty("QUIZ_PLAYER_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            shuffle: non_empty("QUIZ_PLAYER_SHUFFLE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.quiz_dir, PathBuf::from("quizzes"));
        assert_eq!(config.log_path, PathBuf::from("quiz_player.log"));
        assert!(config.db_path.ends_with("quiz.db"));
        assert!(!config.shuffle);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("QUIZ_PLAYER_DIR", "/tmp/q"),
            ("QUIZ_PLAYER_DB", "/tmp/q.db"),
            ("QUIZ_PLAYER_LOG", "/tmp/q.log"),
            ("QUIZ_PLAYER_SHUFFLE", "true"),
        ]));
        assert_eq!(config.quiz_dir, PathBuf::from("/tmp/q"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/q.db"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/q.log"));
        assert!(config.shuffle);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("QUIZ_PLAYER_DIR", "  ")]));
        assert_eq!(config.quiz_dir, PathBuf::from("quizzes"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("nope"));
    }
}
