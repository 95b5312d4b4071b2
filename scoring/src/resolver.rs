//! Outcome resolution for a batsmen × bowlers sheet.
//!
//! Every cell is derived from the two name lists and the static dismissal
//! table alone, so a grid is always rebuilt whole rather than patched.

use crate::{dismissal_table::dismissed_by, outcome::{blank_matrix, Outcome, OutcomeMatrix}, GRID_SIZE};

/// Resolves the full outcome matrix. Lists shorter than [`GRID_SIZE`] are
/// treated as padded with blank names and longer lists are cut off.
pub fn resolve<B: AsRef<str>, W: AsRef<str>>(batsmen: &[B], bowlers: &[W]) -> OutcomeMatrix {
    let mut outcomes = blank_matrix();
    for (row, batsman) in batsmen.iter().take(GRID_SIZE).enumerate() {
        for (col, bowler) in bowlers.iter().take(GRID_SIZE).enumerate() {
            outcomes[row][col] = resolve_cell(batsman.as_ref(), bowler.as_ref());
        }
    }
    outcomes
}

pub fn resolve_cell(batsman: &str, bowler: &str) -> Outcome {
    if batsman.is_empty() || bowler.is_empty() {
        return Outcome::Blank;
    }
    if is_dismissed(batsman, dismissed_by(bowler)) {
        Outcome::Out
    } else {
        Outcome::NotOut
    }
}

/// Case-sensitive prefix match in either direction, so "V Kohli" matches
/// "V Koh" and "V Kohli Jr" alike.
pub fn is_dismissed(batsman: &str, dismissed: &[&str]) -> bool {
    dismissed
        .iter()
        .any(|name| name.starts_with(batsman) || batsman.starts_with(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_only(name: &str) -> [&str; GRID_SIZE] {
        [name, "", "", "", ""]
    }

    fn assert_only_first_cell(outcomes: &OutcomeMatrix, expected: Outcome) {
        for (row, cells) in outcomes.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if (row, col) == (0, 0) {
                    assert_eq!(*cell, expected);
                } else {
                    assert_eq!(*cell, Outcome::Blank, "cell [{row}][{col}]");
                }
            }
        }
    }

    #[test]
    fn dhoni_out_to_sandeep() {
        let outcomes = resolve(&first_only("MS Dhoni"), &first_only("Sandeep"));
        assert_only_first_cell(&outcomes, Outcome::Out);
    }

    #[test]
    fn kohli_out_to_steyn() {
        let outcomes = resolve(&first_only("V Kohli"), &first_only("DW Steyn"));
        assert_only_first_cell(&outcomes, Outcome::Out);
    }

    #[test]
    fn kohli_not_out_to_sandeep() {
        let outcomes = resolve(&first_only("V Kohli"), &first_only("Sandeep"));
        assert_only_first_cell(&outcomes, Outcome::NotOut);
    }

    #[test]
    fn unknown_bowler_column_is_not_out() {
        let batsmen = ["MS Dhoni", "", "V Kohli", "Nobody", "RG Sharma"];
        let bowlers = ["Sandeep", "Unknown Spinner", "", "", ""];
        let outcomes = resolve(&batsmen, &bowlers);
        for (row, batsman) in batsmen.iter().enumerate() {
            let expected = if batsman.is_empty() { Outcome::Blank } else { Outcome::NotOut };
            assert_eq!(outcomes[row][1], expected);
        }
    }

    #[test]
    fn blank_names_give_blank_cells() {
        let batsmen = ["MS Dhoni", "", "V Kohli", "", "RG Sharma"];
        let bowlers = ["", "A Nehra", "", "MM Sharma", ""];
        let outcomes = resolve(&batsmen, &bowlers);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if batsmen[row].is_empty() || bowlers[col].is_empty() {
                    assert_eq!(outcomes[row][col], Outcome::Blank);
                } else {
                    assert_ne!(outcomes[row][col], Outcome::Blank);
                }
            }
        }
    }

    #[test]
    fn short_and_long_lists_are_coerced() {
        let outcomes = resolve(&["MS Dhoni"], &["Sandeep", "A", "B", "C", "D", "Sr Watson"]);
        assert_eq!(outcomes[0][0], Outcome::Out);
        assert_eq!(outcomes[0][4], Outcome::NotOut);
        assert_eq!(outcomes[1], [Outcome::Blank; GRID_SIZE]);

        let empty: [&str; 0] = [];
        assert_eq!(resolve(&empty, &empty), blank_matrix());
    }

    #[test]
    fn prefix_matches_both_ways() {
        assert!(is_dismissed("V Koh", &["V Kohli"]));
        assert!(is_dismissed("V Kohli (c)", &["V Kohli"]));
        assert!(!is_dismissed("v kohli", &["V Kohli"]));
        assert!(!is_dismissed("Kohli", &["V Kohli"]));
        // short names over-match; kept as is
        assert_eq!(resolve_cell("S", "Sandeep"), Outcome::Out);
    }

    #[test]
    fn resolving_twice_gives_same_matrix() {
        let batsmen = ["AB de Villiers", "DA Warner", "", "G Gambhir", "PA Patel"];
        let bowlers = ["B Kumar", "R Ashwin", "M Morkel", "", "Nobody"];
        assert_eq!(resolve(&batsmen, &bowlers), resolve(&batsmen, &bowlers));
    }
}
