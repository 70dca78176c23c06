//! Property tests for key selection.

use proptest::prelude::*;

use envpush::domain::services::eligible_keys;
use envpush::{EnvFile, SkipSet};

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    let key = proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,11}").unwrap();
    let value = proptest::string::string_regex("[a-z0-9]{0,8}").unwrap();
    proptest::collection::vec((key, value), 0..24)
}

fn render(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, v))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Skipped keys never appear in the selection.
    #[test]
    fn property_skipped_keys_never_selected(
        entries in entries(),
        skip_mask in proptest::collection::vec(any::<bool>(), 24),
    ) {
        let skip: SkipSet = entries
            .iter()
            .zip(&skip_mask)
            .filter(|(_, skipped)| **skipped)
            .map(|((k, _), _)| k.clone())
            .collect();
        let file = EnvFile::parse(&render(&entries));

        for key in eligible_keys(&file, &skip) {
            prop_assert!(!skip.contains(&key));
        }
    }

    /// PROPERTY: Selection is sorted, duplicate-free and stable across runs.
    #[test]
    fn property_selection_sorted_and_stable(
        entries in entries(),
    ) {
        let content = render(&entries);
        let first = eligible_keys(&EnvFile::parse(&content), &SkipSet::empty());
        let second = eligible_keys(&EnvFile::parse(&content), &SkipSet::empty());

        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&first, &sorted);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Every selected key has a non-empty value.
    #[test]
    fn property_empty_values_excluded(
        entries in entries(),
    ) {
        let file = EnvFile::parse(&render(&entries));

        for key in eligible_keys(&file, &SkipSet::empty()) {
            prop_assert!(!file.get(&key).unwrap_or_default().is_empty());
        }
    }
}
