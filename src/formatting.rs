use chrono::{DateTime, NaiveDate, NaiveDateTime};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::table::Alignment;

/// Box-drawing and indicator characters
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub star_filled: String,
    pub star_empty: String,
    pub sort_asc: String,
    pub sort_desc: String,
    pub arrow_left: String,
    pub arrow_right: String,
    pub double_left: String,
    pub double_right: String,
    pub connector_up: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            star_filled: "★".to_string(),
            star_empty: "☆".to_string(),
            sort_asc: "▲".to_string(),
            sort_desc: "▼".to_string(),
            arrow_left: "←".to_string(),
            arrow_right: "→".to_string(),
            double_left: "«".to_string(),
            double_right: "»".to_string(),
            connector_up: "┴".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            star_filled: "*".to_string(),
            star_empty: ".".to_string(),
            sort_asc: "^".to_string(),
            sort_desc: "v".to_string(),
            arrow_left: "<-".to_string(),
            arrow_right: "->".to_string(),
            double_left: "<<".to_string(),
            double_right: ">>".to_string(),
            connector_up: "+".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Fit `text` into exactly `width` display columns
///
/// Longer text is truncated with an ellipsis; shorter text is padded per `align`.
pub fn fit_cell(text: &str, width: usize, align: Alignment) -> String {
    let text_width = text.width();
    if text_width > width {
        return truncate(text, width);
    }

    let padding = width - text_width;
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        Alignment::Center => {
            let left = padding / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Turn a slug like "lebron-james" into "Lebron James"
pub fn humanize_slug(slug: &str) -> String {
    slug.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render an upstream transaction timestamp as M/D/YYYY
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` and plain dates. Anything
/// else is shown as received.
pub fn format_transaction_date(raw: &str) -> String {
    const DISPLAY: &str = "%-m/%-d/%Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    raw.to_string()
}
