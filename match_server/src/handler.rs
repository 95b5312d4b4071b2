use bytes::Bytes;
use scoring::{grid::GridData, match_data::InsertMatchData};
use tracing::{debug, warn};
use warp::{http::StatusCode, reply, Reply};

use crate::{context::{self, MatchContextRef}, Result};

const INVALID_MATCH_DATA: &str = "Invalid match data";
const INVALID_GRID_DATA: &str = "Invalid grid data";

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, serde::Serialize)]
struct SuccessBody {
    success: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ResolveRequest {
    batsmen: Vec<String>,
    bowlers: Vec<String>,
}

fn bad_request(error: &'static str) -> reply::WithStatus<reply::Json> {
    reply::with_status(reply::json(&ErrorBody { error }), StatusCode::BAD_REQUEST)
}

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}

pub async fn list_handler(context_ref: MatchContextRef) -> Result<impl Reply> {
    let records = context::list_match_data(&context_ref).await;
    Ok(reply::json(&records))
}

pub async fn insert_handler(body: Bytes, context_ref: MatchContextRef) -> Result<impl Reply> {
    let data = match InsertMatchData::parse(&body) {
        Ok(data) => data,
        Err(e) => {
            warn!("rejected match data: {e}");
            return Ok(bad_request(INVALID_MATCH_DATA));
        }
    };
    let record = context::insert_match_data(&context_ref, data).await;
    Ok(reply::with_status(reply::json(&record), StatusCode::OK))
}

pub async fn clear_handler(context_ref: MatchContextRef) -> Result<impl Reply> {
    context::clear_match_data(&context_ref).await;
    Ok(reply::json(&SuccessBody { success: true }))
}

pub async fn resolve_handler(body: Bytes) -> Result<impl Reply> {
    let request = match serde_json::from_slice::<ResolveRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("rejected grid data: {e}");
            return Ok(bad_request(INVALID_GRID_DATA));
        }
    };
    let grid = GridData::from_names(&request.batsmen, &request.bowlers);
    debug!(batsmen = ?grid.batsmen, bowlers = ?grid.bowlers, "grid resolved");
    Ok(reply::with_status(reply::json(&grid), StatusCode::OK))
}
