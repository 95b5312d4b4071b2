use thiserror::Error;

pub type MatchId = u32;

/// A stored batsman vs bowler verdict.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub id: MatchId,
    pub batsman: String,
    pub bowler: String,
    pub is_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMatchData {
    pub batsman: String,
    pub bowler: String,
    pub is_out: bool,
}

#[derive(Debug, Error)]
pub enum MatchDataError {
    #[error("malformed match data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("match data field `{0}` must not be empty")]
    EmptyField(&'static str),
}

impl InsertMatchData {
    /// Decodes and validates a JSON request body. Unknown fields are ignored.
    pub fn parse(bytes: &[u8]) -> Result<InsertMatchData, MatchDataError> {
        let data = serde_json::from_slice::<InsertMatchData>(bytes)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), MatchDataError> {
        if self.batsman.is_empty() {
            return Err(MatchDataError::EmptyField("batsman"));
        }
        if self.bowler.is_empty() {
            return Err(MatchDataError::EmptyField("bowler"));
        }
        Ok(())
    }

    pub fn with_id(self, id: MatchId) -> MatchData {
        MatchData {
            id,
            batsman: self.batsman,
            bowler: self.bowler,
            is_out: self.is_out,
        }
    }
}
