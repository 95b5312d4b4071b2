pub mod dismissal_table;
pub mod grid;
pub mod match_data;
pub mod outcome;
pub mod resolver;
pub mod roster;

/// Rows (batsmen) and columns (bowlers) on a scoring sheet.
pub const GRID_SIZE: usize = 5;
