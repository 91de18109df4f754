use crate::models::QuizResult;
use rusqlite::{Connection, OptionalExtension, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// A finished quiz attempt. In-progress sessions are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub id: i64,
    pub quiz_name: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub completed_at: i64,
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn row_to_attempt(row: &rusqlite::Row<'_>) -> Result<AttemptRecord> {
    Ok(AttemptRecord {
        id: row.get(0)?,
        quiz_name: row.get(1)?,
        score: row.get(2)?,
        total: row.get(3)?,
        percentage: row.get(4)?,
        completed_at: row.get(5)?,
    })
}

pub fn record_attempt(conn: &Connection, quiz_name: &str, result: &QuizResult) -> Result<i64> {
    record_attempt_at(conn, quiz_name, result, now())
}

pub fn record_attempt_at(
    conn: &Connection,
    quiz_name: &str,
    result: &QuizResult,
    completed_at: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO attempts (quiz_name, score, total, percentage, completed_at)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            quiz_name,
            result.score as u32,
            result.total as u32,
            result.percentage,
            completed_at
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Most recent attempts first.
pub fn recent_attempts(conn: &Connection, limit: usize) -> Result<Vec<AttemptRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, quiz_name, score, total, percentage, completed_at
         FROM attempts ORDER BY completed_at DESC, id DESC LIMIT ?",
    )?;

    let attempts = stmt
        .query_map([limit as i64], row_to_attempt)?
        .collect::<Result<Vec<_>>>()?;
    Ok(attempts)
}

pub fn best_attempt(conn: &Connection, quiz_name: &str) -> Result<Option<AttemptRecord>> {
    conn.query_row(
        "SELECT id, quiz_name, score, total, percentage, completed_at
         FROM attempts WHERE quiz_name = ?
         ORDER BY percentage DESC, completed_at ASC LIMIT 1",
        [quiz_name],
        row_to_attempt,
    )
    .optional()
}
