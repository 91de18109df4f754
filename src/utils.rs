use unicode_width::UnicodeWidthChar;

/// Truncates to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Text bar such as `[#####-----]` for a 0..=100 percentage.
pub fn progress_bar(percentage: u32, width: usize) -> String {
    let filled = (percentage.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
