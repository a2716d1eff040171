use crate::record::TerminalRecord;

/// Trim and lowercase a raw query. An empty result means "no query".
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Indices of records whose lowercased model contains `query`, in catalog order.
///
/// `query` is expected to be normalized already. An empty query matches every
/// record, so callers stop before filtering when there is nothing to search for.
pub fn matching_indices(query: &str, records: &[TerminalRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.model().to_lowercase().contains(query))
        .map(|(index, _)| index)
        .collect()
}

pub fn filter<'a>(query: &str, records: &'a [TerminalRecord]) -> Vec<&'a TerminalRecord> {
    matching_indices(query, records)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(models: &[&str]) -> Vec<TerminalRecord> {
        models
            .iter()
            .map(|model| {
                TerminalRecord::from_fields([("model", *model), ("terminal_type", "T")]).unwrap()
            })
            .collect()
    }

    fn models<'a>(matches: &[&'a TerminalRecord]) -> Vec<&'a str> {
        matches.iter().map(|record| record.model()).collect()
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  AISINO "), "aisino");
        assert_eq!(normalize("Teplo P8\n"), "teplo p8");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn query_is_case_and_trim_insensitive() {
        let records = records(&["Aisino V37", "PAX S300"]);
        let query = normalize(" AISINO ");
        assert_eq!(models(&filter(&query, &records)), vec!["Aisino V37"]);
    }

    #[test]
    fn inner_whitespace_is_not_collapsed() {
        let records = records(&["Aisino V37"]);
        assert!(filter(&normalize("aisino  v37"), &records).is_empty());
        assert_eq!(filter(&normalize("aisino v37"), &records).len(), 1);
    }

    #[test]
    fn cyrillic_models_match_case_insensitively() {
        let records = records(&["Терминал Альфа", "PAX S300"]);
        assert_eq!(
            models(&filter(&normalize("АЛЬФА"), &records)),
            vec!["Терминал Альфа"]
        );
    }

    #[test]
    fn matches_keep_catalog_order() {
        let records = records(&["PAX S300", "Aisino V37", "PAX SP30", "PAX A930"]);
        assert_eq!(matching_indices("pax", &records), vec![0, 2, 3]);
    }

    proptest! {
        #[test]
        fn empty_result_iff_no_model_contains_query(
            raw_models in proptest::collection::vec("[a-zA-Z0-9 ]{1,12}", 0..8),
            raw_query in "[a-zA-Z0-9 ]{0,6}",
        ) {
            let model_refs: Vec<&str> = raw_models.iter().map(String::as_str).collect();
            let records = records(&model_refs);
            let query = normalize(&raw_query);

            let expected_any = raw_models.iter().any(|m| m.to_lowercase().contains(&query));
            prop_assert_eq!(!filter(&query, &records).is_empty(), expected_any);
        }

        #[test]
        fn matches_are_an_ordered_subsequence(
            raw_models in proptest::collection::vec("[a-c]{1,4}", 0..10),
            query in "[a-c]{1,2}",
        ) {
            let model_refs: Vec<&str> = raw_models.iter().map(String::as_str).collect();
            let records = records(&model_refs);

            let indices = matching_indices(&query, &records);
            prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
            for index in indices {
                prop_assert!(raw_models[index].contains(&query));
            }
        }
    }
}
