//! Report identifiers and file names.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

use crate::error::{Error, Result};

/// Maximum length of the sanitized title segment.
pub const MAX_TITLE_LEN: usize = 30;

/// Timestamp layout used in identifiers and file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Reduce a title to a file-name-safe segment.
///
/// Drops everything outside `[A-Za-z0-9_ -]`, collapses runs of whitespace
/// and hyphens into one `_`, and truncates to [`MAX_TITLE_LEN`] characters.
/// The result may be empty.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let collapsed = separator_run().replace_all(&kept, "_");

    collapsed.chars().take(MAX_TITLE_LEN).collect()
}

fn separator_run() -> &'static Regex {
    static SEPARATOR_RUN: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RUN.get_or_init(|| Regex::new(r"[-\s]+").unwrap())
}

/// Build the report identifier `{prefix}_{sanitized_title}_{timestamp}`.
///
/// Fails when the title has no usable characters.
pub fn report_id(prefix: &str, title: &str, timestamp: &DateTime<FixedOffset>) -> Result<String> {
    let safe_title = sanitize_title(title);
    if safe_title.is_empty() {
        return Err(Error::EmptyTitle(title.to_string()));
    }
    Ok(format!(
        "{}_{}_{}",
        prefix,
        safe_title,
        timestamp.format(TIMESTAMP_FORMAT)
    ))
}

/// Build the file name `{prefix}_{sanitized_title}_{timestamp}.{extension}`.
pub fn report_filename(
    prefix: &str,
    title: &str,
    timestamp: &DateTime<FixedOffset>,
    extension: &str,
) -> Result<String> {
    Ok(format!(
        "{}.{}",
        report_id(prefix, title, timestamp)?,
        extension
    ))
}
