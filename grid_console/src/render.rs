use scoring::{grid::GridData, match_data::MatchData, GRID_SIZE};

const COLUMN_WIDTH: usize = 16;

fn label(name: &str, placeholder: String) -> String {
    if name.is_empty() {
        placeholder
    } else {
        name.to_owned()
    }
}

/// Text table of the grid: bowlers across the top, batsmen down the side.
/// Blank names show as `Bat<n>` and `B<n>`.
pub fn render_grid(grid: &GridData) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<COLUMN_WIDTH$}", "Batsman/Bowler"));
    for (col, bowler) in grid.bowlers.iter().enumerate() {
        out.push_str(&format!("{:<COLUMN_WIDTH$}", label(bowler, format!("B{}", col + 1))));
    }
    out.push('\n');
    for row in 0..GRID_SIZE {
        out.push_str(&format!("{:<COLUMN_WIDTH$}", label(&grid.batsmen[row], format!("Bat{}", row + 1))));
        for outcome in grid.outcomes[row].iter() {
            out.push_str(&format!("{:<COLUMN_WIDTH$}", outcome.as_str()));
        }
        out.push('\n');
    }
    out
}

pub fn render_records(records: &[MatchData]) -> String {
    if records.is_empty() {
        return "no match data stored\n".to_owned();
    }
    let mut out = String::new();
    for record in records {
        let verdict = if record.is_out { "out" } else { "not out" };
        out.push_str(&format!("#{:<4} {} vs {}: {}\n", record.id, record.batsman, record.bowler, verdict));
    }
    out
}

pub fn render_names(names: &[&str]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, name));
    }
    out
}
