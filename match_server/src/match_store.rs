use scoring::match_data::{InsertMatchData, MatchData, MatchId};

/// In-memory match records. Ids keep counting up across `clear`.
pub struct MatchStore {
    pub records: Vec<MatchData>,
    pub id_counter: MatchId,
}

impl Default for MatchStore {
    fn default() -> Self {
        MatchStore::new()
    }
}

impl MatchStore {
    pub fn new() -> MatchStore {
        MatchStore {
            records: Vec::new(),
            id_counter: 1,
        }
    }

    pub fn list(&self) -> Vec<MatchData> {
        self.records.clone()
    }

    pub fn insert(&mut self, data: InsertMatchData) -> MatchData {
        let id = self.id_counter;
        self.id_counter += 1;
        let record = data.with_id(id);
        self.records.push(record.clone());
        record
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
