//! Elapsed-time formatting.
//!
//! Durations are whole seconds. Every conversion truncates; nothing rounds.

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Hours, minutes, and seconds of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ElapsedParts {
    #[must_use]
    pub const fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }
}

/// Format as `HH:MM:SS`. Hours grow past two digits instead of wrapping.
#[must_use]
pub fn format_clock(total: u64) -> String {
    let parts = ElapsedParts::from_seconds(total);
    format!(
        "{:02}:{:02}:{:02}",
        parts.hours, parts.minutes, parts.seconds
    )
}

/// Format as `"N hours M minutes"`, dropping a zero component.
///
/// Anything under a minute reads `"0 minutes"`.
#[must_use]
pub fn format_human(total: u64) -> String {
    let parts = ElapsedParts::from_seconds(total);
    match (parts.hours, parts.minutes) {
        (0, m) => plural(m, "minute"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{} {}", plural(h, "hour"), plural(m, "minute")),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "00:00:00")]
    #[case(59, "00:00:59")]
    #[case(61, "00:01:01")]
    #[case(3600, "01:00:00")]
    #[case(3661, "01:01:01")]
    #[case(360_000, "100:00:00")]
    fn clock_format(#[case] secs: u64, #[case] expected: &str) {
        assert_eq!(format_clock(secs), expected);
    }

    #[rstest]
    #[case(0, "0 minutes")]
    #[case(59, "0 minutes")]
    #[case(60, "1 minute")]
    #[case(150, "2 minutes")]
    #[case(3600, "1 hour")]
    #[case(3659, "1 hour")]
    #[case(3720, "1 hour 2 minutes")]
    #[case(7260, "2 hours 1 minute")]
    fn human_format_truncates(#[case] secs: u64, #[case] expected: &str) {
        assert_eq!(format_human(secs), expected);
    }

    #[test]
    fn parts_split_by_integer_division() {
        assert_eq!(
            ElapsedParts::from_seconds(7384),
            ElapsedParts {
                hours: 2,
                minutes: 3,
                seconds: 4
            }
        );
    }
}
