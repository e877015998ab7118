//! Front matter value conversions.

use crate::domain::model::{STATUS_DRAFT, STATUS_PUBLISHED};
use crate::utils::error::{ConvertError, Result};
use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 150;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Removes one pair of surrounding double quotes, then a single apostrophe at
/// either end.
pub fn clean_title(value: &str) -> String {
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    let value = value.strip_suffix('\'').unwrap_or(value);
    let value = value.strip_prefix('\'').unwrap_or(value);
    value.to_string()
}

pub fn truncate_title(title: &str, max_chars: usize) -> String {
    title.chars().take(max_chars).collect()
}

pub fn status_from_published(value: &str) -> &'static str {
    if value == "true" {
        STATUS_PUBLISHED
    } else {
        STATUS_DRAFT
    }
}

/// Reduces a date value to `YYYY-MM-DD HH:MM`.
///
/// Only the two minute digits survive after the first colon, which drops
/// seconds and time zone suffixes; a bare date gets midnight.
pub fn normalize_date(value: &str) -> String {
    let mut parts = value.split(':');
    let head = parts.next().unwrap_or_default();
    let normalized = match parts.next() {
        Some(rest) => {
            let minutes = rest.get(..2).unwrap_or(rest);
            format!("{}:{}", head, minutes)
        }
        None => format!("{} 00:00", head),
    };
    normalized.trim().to_string()
}

/// Parses a front matter date as local time and returns epoch milliseconds.
pub fn parse_timestamp(file: &str, value: &str) -> Result<i64> {
    let normalized = normalize_date(value);

    // 兩種格式都失敗時回報主要格式的錯誤
    NaiveDateTime::parse_from_str(&normalized, DATE_FORMAT)
        .or_else(|primary| {
            NaiveDateTime::parse_from_str(&normalized, ISO_DATE_FORMAT).map_err(|_| primary)
        })
        .map(|naive| local_millis(&naive))
        .map_err(|source| ConvertError::InvalidDate {
            file: file.to_string(),
            value: value.to_string(),
            source,
        })
}

fn local_millis(naive: &NaiveDateTime) -> i64 {
    match Local.from_local_datetime(naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        // 夏令時間跳過的時段，改用 UTC 解讀
        LocalResult::None => naive.and_utc().timestamp_millis(),
    }
}

pub fn category_labels(value: &str) -> impl Iterator<Item = &str> {
    value.split(' ').filter(|label| !label.is_empty())
}

/// Octopress inline lists leave `[`, `]` and `,` on the labels.
pub fn tag_display_name(label: &str) -> String {
    label.replace([',', '[', ']'], "")
}

pub fn rewrite_codeblocks(markdown: &str) -> String {
    markdown
        .replace("{% codeblock %}", "```")
        .replace("{% endcodeblock %}", "```")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::format::ParseErrorKind;

    fn local(value: &str) -> i64 {
        let naive = NaiveDateTime::parse_from_str(value, DATE_FORMAT).unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap().timestamp_millis()
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("\"Quoted\""), "Quoted");
        assert_eq!(clean_title("'Single'"), "Single");
        assert_eq!(clean_title("\"'Both'\""), "Both");
        assert_eq!(clean_title("Don't stop"), "Don't stop");
        assert_eq!(clean_title("plain"), "plain");
    }

    #[test]
    fn test_truncate_title() {
        let long = "é".repeat(200);
        let truncated = truncate_title(&long, DEFAULT_MAX_TITLE_LENGTH);
        assert_eq!(truncated.chars().count(), 150);
        assert_eq!(truncated, "é".repeat(150));

        assert_eq!(truncate_title("short", DEFAULT_MAX_TITLE_LENGTH), "short");
    }

    #[test]
    fn test_status_from_published() {
        assert_eq!(status_from_published("true"), "published");
        assert_eq!(status_from_published("false"), "draft");
        assert_eq!(status_from_published("yes"), "draft");
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2014-03-05 10:30"), "2014-03-05 10:30");
        assert_eq!(normalize_date("2014-03-05 10:30:00 +0100"), "2014-03-05 10:30");
        assert_eq!(normalize_date("2014-03-05T10:30:00-05:00"), "2014-03-05T10:30");
        assert_eq!(normalize_date("2014-03-05"), "2014-03-05 00:00");
        assert_eq!(normalize_date("2014-03-05 10:30 +0100"), "2014-03-05 10:30");
        assert_eq!(normalize_date("2014-03-05 10:30Z"), "2014-03-05 10:30");
        assert_eq!(normalize_date("2014-03-05 10:5"), "2014-03-05 10:5");
    }

    #[test]
    fn test_parse_timestamp() {
        let expected = local("2014-03-05 10:30");
        assert_eq!(parse_timestamp("a.md", "2014-03-05 10:30").unwrap(), expected);
        assert_eq!(parse_timestamp("a.md", "2014-03-05 10:30:59 +0100").unwrap(), expected);
        assert_eq!(parse_timestamp("a.md", "2014-03-05T10:30:00-05:00").unwrap(), expected);
        assert_eq!(parse_timestamp("a.md", "2014-03-05 10:30 +0100").unwrap(), expected);
        assert_eq!(parse_timestamp("a.md", "2014-03-05 10:30Z").unwrap(), expected);
        assert_eq!(
            parse_timestamp("a.md", "2014-03-05").unwrap(),
            local("2014-03-05 00:00")
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("bad.md", "yesterday").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDate { ref file, .. } if file == "bad.md"));
        assert!(parse_timestamp("bad.md", "2014-13-45 10:30").is_err());
    }

    #[test]
    fn test_parse_timestamp_reports_primary_format_error() {
        // 空白分隔的格式會讀到 25 點而超出範圍，ISO 格式則在 'T' 就失敗
        match parse_timestamp("bad.md", "2014-03-05 25:30").unwrap_err() {
            ConvertError::InvalidDate { source, .. } => {
                assert_eq!(source.kind(), ParseErrorKind::OutOfRange);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_category_labels_and_names() {
        let labels: Vec<&str> = category_labels("[rust,  ghost]").collect();
        assert_eq!(labels, vec!["[rust,", "ghost]"]);
        assert_eq!(tag_display_name("[rust,"), "rust");
        assert_eq!(tag_display_name("ghost]"), "ghost");
        assert_eq!(category_labels("").count(), 0);
    }

    #[test]
    fn test_rewrite_codeblocks() {
        assert_eq!(
            rewrite_codeblocks("a {% codeblock %}X{% endcodeblock %} b"),
            "a ```X``` b"
        );
        assert_eq!(rewrite_codeblocks("untouched"), "untouched");
    }
}
