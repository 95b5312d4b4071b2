use std::fmt;

use crate::GRID_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "not out")]
    NotOut,
    #[default]
    #[serde(rename = "")]
    Blank,
}

pub type OutcomeMatrix = [[Outcome; GRID_SIZE]; GRID_SIZE];

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Out => "out",
            Outcome::NotOut => "not out",
            Outcome::Blank => "",
        }
    }

    pub fn is_out(&self) -> bool {
        *self == Outcome::Out
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn blank_matrix() -> OutcomeMatrix {
    [[Outcome::Blank; GRID_SIZE]; GRID_SIZE]
}
