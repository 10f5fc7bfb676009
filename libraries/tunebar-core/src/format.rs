//! Display formatting helpers

/// Formats a duration in seconds as `M:SS`
///
/// Minutes are not wrapped into hours, so an hour-long mix renders as `60:00`.
///
/// # Examples
///
/// ```
/// use tunebar_core::format::format_duration;
///
/// assert_eq!(format_duration(213), "3:33");
/// assert_eq!(format_duration(3600), "60:00");
/// ```
pub fn format_duration(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Truncates `text` to `max_chars` characters, appending `...` when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("Sorry", 50), "Sorry");
    }

    #[test]
    fn long_text_is_cut_on_char_boundaries() {
        assert_eq!(truncate("lofi hip hop radio 📚 - beats", 20), "lofi hip hop radio 📚...");
    }
}
