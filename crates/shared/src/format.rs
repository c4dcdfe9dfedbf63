//! Display formatting for dashboard cards.

/// Formats an integer with `,` thousands separators (`77350` -> `77,350`).
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a whole-dollar amount (`77350` -> `$77,350`).
pub fn currency(value: u64) -> String {
    format!("${}", thousands(value))
}

/// Formats a dollar amount rounded to whole dollars, halves away from zero
/// (`28.5` -> `$29`). No thousands separators.
pub fn whole_dollars(value: f64) -> String {
    format!("${}", value.round())
}

/// Formats a percentage with a fixed number of decimals (`4.5` -> `4.5%`).
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Pluralizes a count with a simple `s` suffix (`1 campaign`, `2 campaigns`).
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(77350), "77,350");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(145_150), "$145,150");
        assert_eq!(currency(0), "$0");
    }

    #[test]
    fn test_whole_dollars_rounds_halves_up() {
        assert_eq!(whole_dollars(28.0), "$28");
        assert_eq!(whole_dollars(28.5), "$29");
        assert_eq!(whole_dollars(2.5), "$3");
        assert_eq!(whole_dollars(0.49), "$0");
        assert_eq!(whole_dollars(12345.6), "$12346");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(4.366_666, 1), "4.4%");
        assert_eq!(percent(0.0, 1), "0.0%");
    }

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(1, "campaign"), "1 campaign");
        assert_eq!(count_noun(0, "campaign"), "0 campaigns");
        assert_eq!(count_noun(3, "campaign"), "3 campaigns");
    }
}
