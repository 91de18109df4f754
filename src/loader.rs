use crate::models::{Question, QuizSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const QUIZ_EXTENSIONS: [&str; 2] = ["json", "csv"];

pub fn get_quiz_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(ext) = path.extension().and_then(|e| e.to_str())
                && QUIZ_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn quiz_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads a quiz from a `.json` or `.csv` file, dropping malformed questions.
pub fn load_quiz(path: &Path) -> io::Result<QuizSet> {
    let content = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let questions = match ext.as_deref() {
        Some("json") => parse_json(&content)?,
        Some("csv") => parse_csv(&content),
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unsupported quiz file: {}", path.display()),
            ));
        }
    };

    QuizSet::new(questions).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("No usable questions in {}", path.display()),
        )
    })
}

fn is_well_formed(question: &Question) -> bool {
    !question.prompt.trim().is_empty()
        && question.options.len() >= 2
        && question.correct_index < question.options.len()
}

pub fn parse_json(content: &str) -> io::Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(questions.into_iter().filter(is_well_formed).collect())
}

/// One question per line: `prompt,option1,...,optionN,correct` with a
/// zero-based correct index.
pub fn parse_csv(content: &str) -> Vec<Question> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_question_row(&parse_csv_line(line)))
        .filter(is_well_formed)
        .collect()
}

fn parse_question_row(fields: &[String]) -> Option<Question> {
    let (correct, rest) = fields.split_last()?;
    let (prompt, options) = rest.split_first()?;
    let correct_index = correct.trim().parse().ok()?;

    Some(Question {
        prompt: prompt.trim().to_string(),
        options: options.iter().map(|o| o.trim().to_string()).collect(),
        correct_index,
    })
}

pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes && current.is_empty() => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}
