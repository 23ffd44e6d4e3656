//! Organization filter over standings rows.
//!
//! Matching is a plain case-insensitive substring test on the team name.
//! The criterion is never interpreted as a pattern.

use standcard_common::error::{StandcardError, StandcardResult};
use standcard_table_model::record::Record;

/// Whether a team name contains the criterion, ignoring case.
///
/// An empty criterion matches every team, including an empty one.
pub fn matches(team: &str, criterion: &str) -> bool {
    team.to_lowercase().contains(&criterion.to_lowercase())
}

/// Keep the records whose team matches `criterion`, in source order.
///
/// No match is a valid, empty result.
pub fn select(records: &[Record], criterion: &str) -> Vec<Record> {
    let needle = criterion.to_lowercase();
    let selected: Vec<Record> = records
        .iter()
        .filter(|record| record.team().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    tracing::debug!(
        total = records.len(),
        selected = selected.len(),
        criterion,
        "Selected records"
    );

    selected
}

/// Like [`select`], but treats an empty result as [`StandcardError::NoMatch`].
pub fn require_matches(records: &[Record], criterion: &str) -> StandcardResult<Vec<Record>> {
    let selected = select(records, criterion);
    if selected.is_empty() {
        return Err(StandcardError::no_match(criterion));
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn team(name: &str) -> Record {
        Record::new().with("Team", name)
    }

    fn teams(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::team).collect()
    }

    #[test]
    fn test_scenario_single_match() {
        let records = vec![Record::from_pairs([
            ("Team", "Alpha Meow"),
            ("WWCD", "3"),
            ("PP", "10"),
            ("FP", "2"),
            ("TP", "15"),
        ])];
        let selected = select(&records, "meow");
        assert_eq!(selected, records);
    }

    #[test]
    fn test_preserves_source_order() {
        let records = vec![
            team("MEOW Zeta"),
            team("Other"),
            team("alpha meow"),
            team("Meowers"),
        ];
        let selected = select(&records, "Meow");
        assert_eq!(teams(&selected), vec!["MEOW Zeta", "alpha meow", "Meowers"]);
    }

    #[test]
    fn test_empty_criterion_keeps_everything() {
        let records = vec![team("A"), Record::new(), team("B")];
        assert_eq!(select(&records, ""), records);
    }

    #[test]
    fn test_empty_input() {
        assert!(select(&[], "meow").is_empty());
        assert!(select(&[], "").is_empty());
    }

    #[test]
    fn test_special_characters_are_literal() {
        let records = vec![team("Team [A.*]"), team("Team AB")];
        let selected = select(&records, "[a.*]");
        assert_eq!(teams(&selected), vec!["Team [A.*]"]);
    }

    #[test]
    fn test_missing_team_never_matches_non_empty_criterion() {
        let records = vec![Record::new().with("TP", "40")];
        assert!(select(&records, "x").is_empty());
    }

    #[test]
    fn test_unicode_case_folding() {
        let records = vec![team("Команда МЯУ"), team("Другие")];
        let selected = select(&records, "мяу");
        assert_eq!(teams(&selected), vec!["Команда МЯУ"]);
    }

    #[test]
    fn test_require_matches_reports_no_match() {
        let records = vec![team("Alpha")];
        let err = require_matches(&records, "meow").unwrap_err();
        assert!(err.is_no_match());
        assert_eq!(require_matches(&records, "alp").unwrap().len(), 1);
    }

    fn arb_records() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(
            prop::option::of("[a-zA-Z ]{0,8}").prop_map(|name| match name {
                Some(name) => Record::new().with("Team", name),
                None => Record::new().with("TP", "1"),
            }),
            0..30,
        )
    }

    proptest! {
        #[test]
        fn prop_result_is_matching_subsequence(records in arb_records(), criterion in "[a-zA-Z]{0,2}") {
            let selected = select(&records, &criterion);

            let mut cursor = records.iter();
            for picked in &selected {
                prop_assert!(cursor.any(|r| r == picked));
                prop_assert!(matches(picked.team(), &criterion));
            }

            let expected = records.iter().filter(|r| matches(r.team(), &criterion)).count();
            prop_assert_eq!(selected.len(), expected);
        }

        #[test]
        fn prop_empty_criterion_is_identity(records in arb_records()) {
            prop_assert_eq!(select(&records, ""), records);
        }
    }
}
