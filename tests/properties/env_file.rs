//! Property tests for env file parsing.

use proptest::prelude::*;

use envpush::EnvFile;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z_][A-Z0-9_]{0,15}").unwrap()
}

fn plain_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9:/._=?&-]{1,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(
        s in "(?s).{0,512}"
    ) {
        let _ = EnvFile::parse(&s);
    }

    /// PROPERTY: `KEY="VALUE"` parses to VALUE with the quotes removed.
    #[test]
    fn property_quoted_value_round_trip(
        k in key(),
        v in plain_value(),
    ) {
        let file = EnvFile::parse(&format!("{}=\"{}\"\n", k, v));
        prop_assert_eq!(file.get(&k), Some(v.as_str()));
    }

    /// PROPERTY: Quoted and unquoted spellings parse to the same value.
    #[test]
    fn property_quotes_are_transparent(
        k in key(),
        v in plain_value(),
    ) {
        let quoted = EnvFile::parse(&format!("{}=\"{}\"", k, v));
        let bare = EnvFile::parse(&format!("{}={}", k, v));
        prop_assert_eq!(quoted.get(&k), bare.get(&k));
    }

    /// PROPERTY: The last assignment of a key wins.
    #[test]
    fn property_last_assignment_wins(
        k in key(),
        values in proptest::collection::vec(plain_value(), 1..6),
    ) {
        let content: String = values
            .iter()
            .map(|v| format!("{}={}\n", k, v))
            .collect();
        let file = EnvFile::parse(&content);

        prop_assert_eq!(file.len(), 1);
        prop_assert_eq!(file.get(&k), values.last().map(String::as_str));
        prop_assert_eq!(file.duplicates().len(), values.len() - 1);
    }

    /// PROPERTY: Comment lines never produce entries.
    #[test]
    fn property_comments_are_ignored(
        k in key(),
        v in plain_value(),
    ) {
        let file = EnvFile::parse(&format!("# {}={}\n   #{}={}", k, v, k, v));
        prop_assert!(file.is_empty());
    }
}
