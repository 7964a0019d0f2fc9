//! Comment types plus the author validation shared by the form and the store.

use serde::{Deserialize, Serialize};

/// Limits for the comment form's author field.
pub const AUTHOR_MIN_CHARS: usize = 3;
pub const AUTHOR_MAX_CHARS: usize = 15;

/// A user-submitted review attached to a dish.
///
/// Ordering is whatever order the caller supplies; nothing re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: u32,
    pub dish_id: u32,
    /// Star rating, one of 1..=5. The input widget owns the constraint.
    pub rating: u8,
    /// The review text. May be empty.
    pub comment: String,
    pub author: String,
    /// ISO-8601 date string as supplied by the caller. Not validated; an
    /// invalid value renders verbatim (see [`format_comment_date`]).
    pub date: String,
}

impl Comment {
    /// The attribution line shown under the review text:
    /// `--{author}, {formatted date}`.
    pub fn attribution(&self) -> String {
        format!("--{}, {}", self.author, format_comment_date(&self.date))
    }
}

/// Transient in-progress form values prior to submission.
///
/// Exists only while the modal is open; discarded after submit or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: u8,
    pub author: String,
    pub message: String,
}

impl Default for CommentDraft {
    fn default() -> Self {
        CommentDraft {
            // First value of the rating widget.
            rating: 1,
            author: String::new(),
            message: String::new(),
        }
    }
}

/// Validate the author field the way the submission form reports it.
///
/// An empty value fails the minimum-length check; the maximum-length check
/// passes for empty values. Counts characters, not bytes.
pub fn validate_author(author: &str) -> Result<(), String> {
    let chars = author.chars().count();
    if chars < AUTHOR_MIN_CHARS {
        return Err("Must be greater than 2 characters".to_string());
    }
    if chars > AUTHOR_MAX_CHARS {
        return Err("Must be 15 characters or less".to_string());
    }
    Ok(())
}

/// Format an ISO-8601 date string for the attribution line: short month,
/// 2-digit day, numeric year (`Jan 05, 2023`).
///
/// Accepts full RFC 3339 timestamps (what the store stamps on new comments)
/// and bare `%Y-%m-%d` dates (what the menu data set carries). Anything else
/// propagates verbatim rather than panicking.
pub fn format_comment_date(date: &str) -> String {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(date) {
        return ts.format("%b %d, %Y").to_string();
    }
    if let Ok(day) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.format("%b %d, %Y").to_string();
    }
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_too_short() {
        assert_eq!(
            validate_author("Bo"),
            Err("Must be greater than 2 characters".to_string())
        );
    }

    #[test]
    fn author_empty_fails_min_length() {
        assert_eq!(
            validate_author(""),
            Err("Must be greater than 2 characters".to_string())
        );
    }

    #[test]
    fn author_too_long() {
        assert_eq!(
            validate_author("abcdefghijklmnop"), // 16 chars
            Err("Must be 15 characters or less".to_string())
        );
    }

    #[test]
    fn author_within_bounds() {
        assert_eq!(validate_author("Bob"), Ok(()));
        assert_eq!(validate_author("abcdefghijklmno"), Ok(())); // 15 chars
    }

    #[test]
    fn author_counts_characters_not_bytes() {
        // 3 characters, 9 bytes
        assert_eq!(validate_author("日本語"), Ok(()));
    }

    #[test]
    fn formats_bare_date() {
        assert_eq!(format_comment_date("2023-01-05"), "Jan 05, 2023");
    }

    #[test]
    fn formats_rfc3339_timestamp() {
        assert_eq!(
            format_comment_date("2023-01-05T14:30:00Z"),
            "Jan 05, 2023"
        );
    }

    #[test]
    fn invalid_date_renders_verbatim() {
        assert_eq!(format_comment_date("not a date"), "not a date");
        assert_eq!(format_comment_date(""), "");
    }

    #[test]
    fn attribution_line() {
        let comment = Comment {
            id: 1,
            dish_id: 1,
            rating: 5,
            comment: "Good".to_string(),
            author: "Bob".to_string(),
            date: "2023-01-05".to_string(),
        };
        assert_eq!(comment.attribution(), "--Bob, Jan 05, 2023");
    }
}
