use thiserror::Error;

use crate::{
    match_data::InsertMatchData,
    outcome::{blank_matrix, Outcome, OutcomeMatrix},
    resolver::{resolve, resolve_cell},
    roster::{match_words, Role},
    GRID_SIZE,
};

pub type NameList = [String; GRID_SIZE];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("slot {0} is out of range, expected 1..={}", GRID_SIZE)]
    IndexOutOfRange(usize),
    #[error("expected {} {field}, got {count}", GRID_SIZE)]
    NameCount { field: &'static str, count: usize },
    #[error("expected {} outcome rows, got {0}", GRID_SIZE)]
    RowCount(usize),
    #[error("outcome row {row} has {len} cells, at most {} allowed", GRID_SIZE)]
    RowTooLong { row: usize, len: usize },
}

/// Names on a sheet plus the verdict for every batsman/bowler pair.
///
/// Owned by whoever is editing the sheet. Every name change goes through
/// [`resolve`] for the whole matrix.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawGridData")]
pub struct GridData {
    pub batsmen: NameList,
    pub bowlers: NameList,
    pub outcomes: OutcomeMatrix,
}

#[derive(serde::Deserialize)]
struct RawGridData {
    batsmen: Vec<String>,
    bowlers: Vec<String>,
    outcomes: Vec<Vec<Outcome>>,
}

impl TryFrom<RawGridData> for GridData {
    type Error = GridError;

    fn try_from(raw: RawGridData) -> Result<GridData, GridError> {
        let batsmen = exact_names("batsmen", raw.batsmen)?;
        let bowlers = exact_names("bowlers", raw.bowlers)?;
        if raw.outcomes.len() != GRID_SIZE {
            return Err(GridError::RowCount(raw.outcomes.len()));
        }
        let mut outcomes = blank_matrix();
        for (row, cells) in raw.outcomes.into_iter().enumerate() {
            if cells.len() > GRID_SIZE {
                return Err(GridError::RowTooLong { row, len: cells.len() });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                outcomes[row][col] = cell;
            }
        }
        Ok(GridData { batsmen, bowlers, outcomes })
    }
}

fn exact_names(field: &'static str, names: Vec<String>) -> Result<NameList, GridError> {
    let count = names.len();
    names.try_into().map_err(|_| GridError::NameCount { field, count })
}

/// Pads with blank names or truncates to [`GRID_SIZE`].
pub fn pad_names<S: AsRef<str>>(names: &[S]) -> NameList {
    std::array::from_fn(|i| names.get(i).map(|name| name.as_ref().to_owned()).unwrap_or_default())
}

fn fill_slots(slots: &mut NameList, found: &[&str]) {
    for (slot, name) in slots.iter_mut().zip(found) {
        *slot = (*name).to_owned();
    }
}

impl Default for GridData {
    fn default() -> Self {
        GridData::new()
    }
}

impl GridData {
    pub fn new() -> GridData {
        GridData {
            batsmen: Default::default(),
            bowlers: Default::default(),
            outcomes: blank_matrix(),
        }
    }

    pub fn from_names<B: AsRef<str>, W: AsRef<str>>(batsmen: &[B], bowlers: &[W]) -> GridData {
        let mut grid = GridData {
            batsmen: pad_names(batsmen),
            bowlers: pad_names(bowlers),
            outcomes: blank_matrix(),
        };
        grid.recompute();
        grid
    }

    pub fn recompute(&mut self) {
        self.outcomes = resolve(&self.batsmen, &self.bowlers);
    }

    pub fn set_batsman(&mut self, index: usize, name: impl Into<String>) -> Result<(), GridError> {
        let slot = self.batsmen.get_mut(index).ok_or(GridError::IndexOutOfRange(index + 1))?;
        *slot = name.into();
        self.recompute();
        Ok(())
    }

    pub fn set_bowler(&mut self, index: usize, name: impl Into<String>) -> Result<(), GridError> {
        let slot = self.bowlers.get_mut(index).ok_or(GridError::IndexOutOfRange(index + 1))?;
        *slot = name.into();
        self.recompute();
        Ok(())
    }

    /// Fills leading slots with roster names found in recognized sheet
    /// text, keeping later slots, then recomputes. A role with no matches
    /// is left as it was.
    pub fn fill_from_text(&mut self, text: &str) {
        fill_slots(&mut self.batsmen, &match_words(Role::Batsman, text));
        fill_slots(&mut self.bowlers, &match_words(Role::Bowler, text));
        self.recompute();
    }

    /// One insert payload per batsman/bowler pair with both names filled,
    /// row by row. Verdicts come from the names, not from `outcomes`, so a
    /// decoded grid with a stale matrix still submits what it shows by name.
    pub fn match_records(&self) -> Vec<InsertMatchData> {
        let mut records = Vec::new();
        for batsman in self.batsmen.iter().filter(|name| !name.is_empty()) {
            for bowler in self.bowlers.iter().filter(|name| !name.is_empty()) {
                records.push(InsertMatchData {
                    batsman: batsman.clone(),
                    bowler: bowler.clone(),
                    is_out: resolve_cell(batsman, bowler).is_out(),
                });
            }
        }
        records
    }
}
