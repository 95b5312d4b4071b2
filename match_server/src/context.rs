use std::sync::Arc;

use scoring::match_data::{InsertMatchData, MatchData};
use tokio::sync::RwLock;
use tracing::info;

use crate::match_store::MatchStore;

pub struct MatchContext {
    pub store: MatchStore,
}

pub type MatchContextRef = Arc<RwLock<MatchContext>>;

impl MatchContext {
    pub fn new() -> MatchContext {
        MatchContext {
            store: MatchStore::new(),
        }
    }

    pub fn new_ref() -> MatchContextRef {
        Arc::new(RwLock::new(MatchContext::new()))
    }
}

impl Default for MatchContext {
    fn default() -> Self {
        MatchContext::new()
    }
}

pub async fn list_match_data(context_ref: &MatchContextRef) -> Vec<MatchData> {
    context_ref.read().await.store.list()
}

pub async fn insert_match_data(context_ref: &MatchContextRef, data: InsertMatchData) -> MatchData {
    let record = context_ref.write().await.store.insert(data);
    info!(id = record.id, batsman = %record.batsman, bowler = %record.bowler, is_out = record.is_out, "match data stored");
    record
}

pub async fn clear_match_data(context_ref: &MatchContextRef) {
    let mut context = context_ref.write().await;
    let removed = context.store.records.len();
    context.store.clear();
    info!(removed, "match data cleared");
}
