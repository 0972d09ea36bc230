use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Digests are regenerated every two hours, on the even UTC hour.
pub const UPDATE_CADENCE_SECS: i64 = 2 * 60 * 60;

/// Parse the timestamp formats the API has been seen to send.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

pub fn format_relative_time(timestamp: &str) -> String {
    format_relative_time_at(timestamp, Utc::now())
}

/// "3 hours ago", "1 minute ago" or "just now". Future and unreadable
/// timestamps read as "just now".
pub fn format_relative_time_at(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return "just now".to_string();
    };
    let elapsed = now.signed_duration_since(then);
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();
    if hours >= 1 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if minutes >= 1 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else {
        "just now".to_string()
    }
}

pub fn next_update_countdown() -> String {
    next_update_countdown_at(Utc::now())
}

/// Time left until the next cadence boundary, as "1h 5m" or "42m".
pub fn next_update_countdown_at(now: DateTime<Utc>) -> String {
    let into_cycle = now.timestamp().rem_euclid(UPDATE_CADENCE_SECS);
    let remaining = (UPDATE_CADENCE_SECS - into_cycle) % UPDATE_CADENCE_SECS;
    let hours = remaining / 3600;
    let minutes = (remaining % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Show a source date the way the detail modal does: "15 Jan 2024", or the
/// raw string when it can't be parsed.
pub fn format_date(date: &str) -> String {
    parse_timestamp(date)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len < 3 {
        return s.chars().take(max_len).collect();
    }
    let end = s
        .char_indices()
        .nth(max_len - 3)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    format!("{}...", &s[..end])
}

/// Wrap text to lines of at most `width` characters, breaking at word
/// boundaries. Words longer than a line are split.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
                current_len = 0;
            }
            if word.is_empty() {
                continue;
            }
            if current.is_empty() {
                current = word.iter().collect();
                current_len = word.len();
            } else if current_len + 1 + word.len() <= width {
                current.push(' ');
                current.extend(word.iter());
                current_len += 1 + word.len();
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.iter().collect();
                current_len = word.len();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Wrap and keep at most `max_lines`, ending the last kept line with "…"
/// when text was dropped.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = word_wrap(text, width);
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let keep = width.saturating_sub(1);
        let mut clipped: String = last.chars().take(keep).collect();
        clipped.push('…');
        *last = clipped;
    }
    lines
}
