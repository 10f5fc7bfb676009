//! ISO-8601 durations as reported by the videos endpoint

use tunebar_core::format::format_duration;

/// Label used for live streams, which report a zero duration
pub const LIVE: &str = "LIVE";

/// Parse `P[nD]T[nH][nM][nS]` into seconds
///
/// Only the designators the API emits are accepted; weeks, months, years and
/// fractional values are rejected.
pub fn parse_iso8601(value: &str) -> Option<u64> {
    let rest = value.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let (date, time) = match rest.split_once('T') {
        Some((_, "")) => return None,
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let days = components(date, &[('D', 86_400)])?;
    let clock = components(time.unwrap_or_default(), &[('H', 3_600), ('M', 60), ('S', 1)])?;
    days.checked_add(clock)
}

/// Sum `<digits><designator>` pairs whose designators appear at most once,
/// in the order given by `units`
fn components(part: &str, units: &[(char, u64)]) -> Option<u64> {
    let mut total = 0u64;
    let mut digits = String::new();
    let mut remaining = units;

    for c in part.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let position = remaining.iter().position(|(designator, _)| *designator == c)?;
        let (_, unit) = remaining[position];
        remaining = &remaining[position + 1..];
        total = total.checked_add(take(&mut digits)?.checked_mul(unit)?)?;
    }

    digits.is_empty().then_some(total)
}

fn take(digits: &mut String) -> Option<u64> {
    let value = digits.parse().ok()?;
    digits.clear();
    Some(value)
}

/// Render an ISO-8601 duration as `m:ss`, `h:mm:ss`, or `LIVE` for zero
pub fn duration_label(value: &str) -> Option<String> {
    let seconds = parse_iso8601(value)?;
    if seconds == 0 {
        return Some(LIVE.to_string());
    }
    if seconds < 3_600 {
        return Some(format_duration(seconds));
    }

    Some(format!(
        "{}:{:02}:{:02}",
        seconds / 3_600,
        (seconds % 3_600) / 60,
        seconds % 60
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_durations() {
        assert_eq!(parse_iso8601("PT3M33S"), Some(213));
        assert_eq!(parse_iso8601("PT45S"), Some(45));
        assert_eq!(parse_iso8601("PT4M"), Some(240));
        assert_eq!(parse_iso8601("PT1H2M3S"), Some(3_723));
        assert_eq!(parse_iso8601("P1DT1S"), Some(86_401));
        assert_eq!(parse_iso8601("P0D"), Some(0));
    }

    #[test]
    fn rejects_malformed_input() {
        for value in [
            "",
            "P",
            "PT",
            "3M33S",
            "PT3X",
            "PT3",
            "P1W",
            "PT1.5S",
            "P1DT",
            "PT1M1M",
            "PT1S1H",
            "P1D1D",
            "PTM",
        ] {
            assert_eq!(parse_iso8601(value), None, "{value:?}");
        }
    }

    #[test]
    fn huge_values_do_not_overflow() {
        assert_eq!(parse_iso8601("P200000000000000D200000000000000D"), None);
        assert_eq!(parse_iso8601("P200000000000000DT99999999999999999H"), None);
        assert_eq!(parse_iso8601("P99999999999999999999D"), None);
        assert_eq!(duration_label("P200000000000000D200000000000000D"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(duration_label("PT3M33S").as_deref(), Some("3:33"));
        assert_eq!(duration_label("PT4M5S").as_deref(), Some("4:05"));
        assert_eq!(duration_label("PT1H2M3S").as_deref(), Some("1:02:03"));
        assert_eq!(duration_label("P0D").as_deref(), Some(LIVE));
        assert_eq!(duration_label("garbage"), None);
    }
}
