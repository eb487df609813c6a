//! Currency Formatting
//!
//! Every dollar figure interpolated into generated rule text goes through
//! [`fmt_usd`] so amounts always carry thousands separators.

/// Format a whole-dollar amount with comma thousands separators: 103100 -> "103,100".
pub fn fmt_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format with a leading dollar sign: 103100 -> "$103,100".
pub fn usd(amount: u64) -> String {
    format!("${}", fmt_usd(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(fmt_usd(0), "0");
        assert_eq!(fmt_usd(500), "500");
        assert_eq!(fmt_usd(999), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt_usd(1_000), "1,000");
        assert_eq!(fmt_usd(26_600), "26,600");
        assert_eq!(fmt_usd(103_100), "103,100");
        assert_eq!(fmt_usd(300_000), "300,000");
        assert_eq!(fmt_usd(1_234_567), "1,234,567");
    }

    #[test]
    fn test_usd_prefix() {
        assert_eq!(usd(25_000), "$25,000");
    }
}
