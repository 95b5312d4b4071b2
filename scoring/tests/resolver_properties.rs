use proptest::prelude::*;
use scoring::{
    dismissal_table::{self, dismissed_by},
    grid::{pad_names, GridData},
    outcome::Outcome,
    resolver::{is_dismissed, resolve},
    roster, GRID_SIZE,
};

fn known_names() -> Vec<&'static str> {
    roster::BATSMEN.iter().copied().chain(dismissal_table::bowlers()).collect()
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(known_names()).prop_map(|name| name.to_owned()),
        (prop::sample::select(known_names()), 0usize..16)
            .prop_map(|(name, len)| name[..len.min(name.len())].to_owned()),
        "[A-Za-z ]{0,12}",
    ]
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name(), 0..8)
}

fn expected(batsman: &str, bowler: &str) -> Outcome {
    if batsman.is_empty() || bowler.is_empty() {
        Outcome::Blank
    } else if is_dismissed(batsman, dismissed_by(bowler)) {
        Outcome::Out
    } else {
        Outcome::NotOut
    }
}

proptest! {
    #[test]
    fn every_cell_is_one_of_three_verdicts(batsmen in names(), bowlers in names()) {
        let outcomes = resolve(&batsmen, &bowlers);
        prop_assert_eq!(outcomes.len(), GRID_SIZE);
        for row in outcomes.iter() {
            prop_assert_eq!(row.len(), GRID_SIZE);
            for cell in row {
                prop_assert!(["out", "not out", ""].contains(&cell.as_str()));
            }
        }
    }

    #[test]
    fn blank_name_gives_blank_cell(batsmen in names(), bowlers in names()) {
        let outcomes = resolve(&batsmen, &bowlers);
        let batsmen = pad_names(&batsmen);
        let bowlers = pad_names(&bowlers);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let blank = batsmen[row].is_empty() || bowlers[col].is_empty();
                prop_assert_eq!(outcomes[row][col] == Outcome::Blank, blank, "cell [{}][{}]", row, col);
            }
        }
    }

    #[test]
    fn resolving_is_repeatable(batsmen in names(), bowlers in names()) {
        prop_assert_eq!(resolve(&batsmen, &bowlers), resolve(&batsmen, &bowlers));
    }

    #[test]
    fn matrix_matches_cellwise_lookup(batsmen in names(), bowlers in names()) {
        let outcomes = resolve(&batsmen, &bowlers);
        let batsmen = pad_names(&batsmen);
        let bowlers = pad_names(&bowlers);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                prop_assert_eq!(outcomes[row][col], expected(&batsmen[row], &bowlers[col]));
            }
        }
    }

    #[test]
    fn single_edit_equals_fresh_resolve(
        batsmen in names(),
        bowlers in names(),
        index in 0..GRID_SIZE,
        replacement in name(),
        edit_bowler in any::<bool>(),
    ) {
        let mut grid = GridData::from_names(&batsmen, &bowlers);
        if edit_bowler {
            grid.set_bowler(index, replacement).unwrap();
        } else {
            grid.set_batsman(index, replacement).unwrap();
        }
        prop_assert_eq!(grid.outcomes, resolve(&grid.batsmen, &grid.bowlers));
    }

    #[test]
    fn records_never_carry_blank_names(batsmen in names(), bowlers in names()) {
        let grid = GridData::from_names(&batsmen, &bowlers);
        let filled = grid.batsmen.iter().filter(|n| !n.is_empty()).count()
            * grid.bowlers.iter().filter(|n| !n.is_empty()).count();
        let records = grid.match_records();
        prop_assert_eq!(records.len(), filled);
        for record in records {
            prop_assert!(record.validate().is_ok());
        }
    }
}
