//! Return-period string parsing.

/// Parses a whitespace-separated string of return periods.
///
/// Negative values are absolute-valued, zeros are dropped, and
/// non-numeric tokens are skipped with a logged warning. Order and
/// duplicates of the surviving values are preserved.
pub fn parse_return_periods(input: &str) -> Vec<u32> {
    let mut periods = Vec::new();
    for token in input.split_whitespace() {
        match token.parse::<i32>() {
            Ok(0) => {}
            Ok(t) => periods.push(t.unsigned_abs()),
            Err(_) => {
                tracing::warn!(token, "skipping unparseable return period");
            }
        }
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tokens_keep_the_valid_periods() {
        assert_eq!(parse_return_periods("2 5 0 -10 abc 25"), vec![2, 5, 10, 25]);
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        assert_eq!(
            parse_return_periods("100 5 5 2 100"),
            vec![100, 5, 5, 2, 100]
        );
    }

    #[test]
    fn zeros_are_dropped() {
        assert_eq!(parse_return_periods("0 0 0"), Vec::<u32>::new());
    }

    #[test]
    fn empty_and_whitespace_only_input() {
        assert!(parse_return_periods("").is_empty());
        assert!(parse_return_periods("   \t  ").is_empty());
    }

    #[test]
    fn negative_periods_are_absolute_valued() {
        assert_eq!(parse_return_periods("-2 -50"), vec![2, 50]);
    }
}
