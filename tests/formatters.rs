use ai_news_tui::ui::formatters::*;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

fn ago(d: Duration) -> String {
    (now() - d).to_rfc3339()
}

// --- format_relative_time ---

#[test]
fn test_relative_one_hour_singular() {
    assert_eq!(format_relative_time_at(&ago(Duration::hours(1)), now()), "1 hour ago");
}

#[test]
fn test_relative_hours_ignore_minute_remainder() {
    let ts = ago(Duration::hours(2) + Duration::minutes(59));
    assert_eq!(format_relative_time_at(&ts, now()), "2 hours ago");
}

#[test]
fn test_relative_many_hours_no_day_rollup() {
    assert_eq!(format_relative_time_at(&ago(Duration::hours(50)), now()), "50 hours ago");
}

#[test]
fn test_relative_one_minute_singular() {
    let ts = ago(Duration::minutes(1) + Duration::seconds(30));
    assert_eq!(format_relative_time_at(&ts, now()), "1 minute ago");
}

#[test]
fn test_relative_minutes_plural() {
    assert_eq!(format_relative_time_at(&ago(Duration::minutes(59)), now()), "59 minutes ago");
}

#[test]
fn test_relative_under_a_minute() {
    assert_eq!(format_relative_time_at(&ago(Duration::seconds(59)), now()), "just now");
    assert_eq!(format_relative_time_at(&ago(Duration::zero()), now()), "just now");
}

#[test]
fn test_relative_future_is_just_now() {
    let ts = (now() + Duration::hours(3)).to_rfc3339();
    assert_eq!(format_relative_time_at(&ts, now()), "just now");
}

#[test]
fn test_relative_unparseable_is_just_now() {
    assert_eq!(format_relative_time_at("yesterday-ish", now()), "just now");
}

#[test]
fn test_relative_accepts_naive_and_date_only() {
    assert_eq!(format_relative_time_at("2025-03-10T09:30:00", now()), "2 hours ago");
    assert_eq!(format_relative_time_at("2025-03-10 11:45:00.250", now()), "14 minutes ago");
    assert_eq!(format_relative_time_at("2025-03-10", now()), "12 hours ago");
}

#[test]
fn test_relative_respects_offsets() {
    // 13:00 at +02:00 is 11:00 UTC
    assert_eq!(format_relative_time_at("2025-03-10T13:00:00+02:00", now()), "1 hour ago");
}

// --- next_update_countdown ---

#[test]
fn test_countdown_just_after_boundary() {
    let t = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 30).unwrap();
    assert_eq!(next_update_countdown_at(t), "1h 59m");
}

#[test]
fn test_countdown_below_one_hour_omits_hours() {
    let t = Utc.with_ymd_and_hms(2025, 3, 10, 13, 15, 0).unwrap();
    assert_eq!(next_update_countdown_at(t), "45m");
}

#[test]
fn test_countdown_exactly_one_hour() {
    let t = Utc.with_ymd_and_hms(2025, 3, 10, 11, 0, 0).unwrap();
    assert_eq!(next_update_countdown_at(t), "1h 0m");
}

#[test]
fn test_countdown_on_boundary() {
    assert_eq!(next_update_countdown_at(now()), "0m");
}

#[test]
fn test_countdown_always_within_cadence() {
    let start = now();
    for minute in 0..240 {
        let s = next_update_countdown_at(start + Duration::minutes(minute) + Duration::seconds(7));
        if let Some((h, m)) = s.strip_suffix('m').and_then(|s| s.split_once("h ")) {
            assert_eq!(h, "1", "{s}");
            assert!(m.parse::<u32>().unwrap() < 60, "{s}");
        } else {
            let m: u32 = s.strip_suffix('m').unwrap().parse().unwrap();
            assert!(m < 60, "{s}");
        }
    }
}

// --- format_date ---

#[test]
fn test_format_date_parses_or_passes_through() {
    assert_eq!(format_date("2024-01-15"), "15 Jan 2024");
    assert_eq!(format_date("last week"), "last week");
}

// --- text helpers ---

#[test]
fn test_truncate_str() {
    assert_eq!(truncate_str("short", 10), "short");
    assert_eq!(truncate_str("a rather long headline", 10), "a rathe...");
    assert_eq!(truncate_str("abcdef", 2), "ab");
}

#[test]
fn test_truncate_str_multibyte() {
    assert_eq!(truncate_str("日本語のニュース記事", 6), "日本語...");
}

#[test]
fn test_word_wrap_breaks_on_words() {
    assert_eq!(
        word_wrap("the quick brown fox jumps", 10),
        vec!["the quick", "brown fox", "jumps"]
    );
}

#[test]
fn test_word_wrap_splits_long_words() {
    assert_eq!(word_wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
}

#[test]
fn test_word_wrap_zero_width() {
    assert!(word_wrap("anything", 0).is_empty());
}

#[test]
fn test_clamp_lines_marks_elision() {
    let text = "one two three four five six seven eight nine ten";
    let lines = clamp_lines(text, 10, 3);
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with('…'));
    assert!(lines.iter().all(|l| l.chars().count() <= 10));
}

#[test]
fn test_clamp_lines_short_text_untouched() {
    assert_eq!(clamp_lines("fits", 10, 3), vec!["fits"]);
}
