use crate::db::attempt::AttemptRecord;
use chrono::{DateTime, Local};

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d";

pub fn format_attempt_date(timestamp: i64) -> String {
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        return "-".to_string();
    };
    let datetime: DateTime<Local> = utc.into();

    let today = Local::now().date_naive();
    let attempt_date = datetime.date_naive();

    if attempt_date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if attempt_date == today - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

pub fn format_attempt_item(attempt: &AttemptRecord) -> String {
    format!(
        "{} - {} ({}/{}, {}%)",
        format_attempt_date(attempt.completed_at),
        attempt.quiz_name,
        attempt.score,
        attempt.total,
        attempt.percentage
    )
}
