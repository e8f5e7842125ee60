use chrono::NaiveDateTime;

/// Timestamp layout the backend sends.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Layout shown under each line item.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Layout the Add Transaction form pre-fills (no seconds).
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Re-render `YYYY-MM-DDTHH:MM:SS` as `DD/MM/YYYY`.
///
/// Anything not written exactly in that layout is returned unchanged.
/// chrono also accepts unpadded fields, a signed year and leap seconds, so
/// a parse only counts when it renders back to the same text.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, INPUT_FORMAT) {
        Ok(parsed) if parsed.format(INPUT_FORMAT).to_string() == raw => {
            parsed.format(DISPLAY_FORMAT).to_string()
        }
        _ => raw.to_string(),
    }
}

/// Local time now, in the form's default date layout.
#[must_use]
pub fn current_input_date() -> String {
    chrono::Local::now().format(FORM_DATE_FORMAT).to_string()
}
