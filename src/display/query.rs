//! Location query classification.

/// Length of a U.S. postal code.
pub const POSTAL_CODE_LEN: usize = 5;

/// How a location query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Nothing entered.
    Empty,
    /// Exactly five digits.
    PostalCode,
    /// All digits but too long to be a postal code.
    InvalidNumeric,
    /// Anything else, e.g. "Springfield, Illinois".
    PlaceName,
}

impl QueryKind {
    /// Whether a query of this kind is sent to the provider.
    pub fn triggers_fetch(self) -> bool {
        matches!(self, QueryKind::PostalCode | QueryKind::PlaceName)
    }
}

/// Classify a query string.
pub fn classify(query: &str) -> QueryKind {
    if query.is_empty() {
        return QueryKind::Empty;
    }

    let len = query.chars().count();
    let all_digits = query.chars().all(|c| c.is_ascii_digit());

    match (all_digits, len) {
        (true, POSTAL_CODE_LEN) => QueryKind::PostalCode,
        (true, n) if n > POSTAL_CODE_LEN => QueryKind::InvalidNumeric,
        _ => QueryKind::PlaceName,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", QueryKind::Empty)]
    #[case("62701", QueryKind::PostalCode)]
    #[case("00000", QueryKind::PostalCode)]
    #[case("627011", QueryKind::InvalidNumeric)]
    #[case("1234567890", QueryKind::InvalidNumeric)]
    #[case("1234", QueryKind::PlaceName)]
    #[case("6270a", QueryKind::PlaceName)]
    #[case("62701-1234", QueryKind::PlaceName)]
    #[case("Springfield, Illinois", QueryKind::PlaceName)]
    #[case(" 62701", QueryKind::PlaceName)]
    #[case("Zürich", QueryKind::PlaceName)]
    fn classifies(#[case] query: &str, #[case] expected: QueryKind) {
        assert_eq!(classify(query), expected);
    }

    #[test]
    fn only_postal_codes_and_places_fetch() {
        assert!(QueryKind::PostalCode.triggers_fetch());
        assert!(QueryKind::PlaceName.triggers_fetch());
        assert!(!QueryKind::InvalidNumeric.triggers_fetch());
        assert!(!QueryKind::Empty.triggers_fetch());
    }

    #[test]
    fn non_ascii_digits_are_not_postal_codes() {
        // Arabic-Indic digits
        assert_eq!(classify("٦٢٧٠١"), QueryKind::PlaceName);
    }
}
