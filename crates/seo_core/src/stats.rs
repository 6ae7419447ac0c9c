use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dollar amounts (`$2.5M`), counts followed by a magnitude word
    /// (`3 million`, `1,200 patients`) and percentages (`45%`).
    static ref STATISTIC: Regex = Regex::new(
        r"\$\d+(?:,\d{3})*(?:\.\d+)?[BMbm]?|\d+(?:,\d{3})*(?:\.\d+)?\s+(?i:million|billion|thousand|patients|participants|people|adults|studies)\b|\d+(?:\.\d+)?%"
    )
    .expect("statistic pattern is valid");
}

/// Every statistic-looking fragment in `text`, in order of appearance.
pub fn find_statistics(text: &str) -> Vec<String> {
    STATISTIC
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// At most `limit` statistic fragments from `text`.
pub fn take_statistics(text: &str, limit: usize) -> Vec<String> {
    STATISTIC
        .find_iter(text)
        .take(limit)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_and_currency() {
        assert_eq!(
            find_statistics("Studies show 45% improvement and $2.5M in savings"),
            vec!["45%", "$2.5M"]
        );
    }

    #[test]
    fn test_magnitude_words() {
        assert_eq!(
            find_statistics("A trial of 1,200 patients across 3 million records"),
            vec!["1,200 patients", "3 million"]
        );
        assert_eq!(find_statistics("Over 40 Studies agree"), vec!["40 Studies"]);
    }

    #[test]
    fn test_currency_suffixes() {
        assert_eq!(find_statistics("worth $4B today, up from $900"), vec!["$4B", "$900"]);
    }

    #[test]
    fn test_plain_numbers_are_ignored() {
        assert!(find_statistics("Published in 2021 by 3 authors").is_empty());
    }

    #[test]
    fn test_take_statistics_limits() {
        assert_eq!(take_statistics("10% then 20% then 30%", 2), vec!["10%", "20%"]);
    }
}
