use std::convert::Infallible;

use warp::{reject::Rejection, Filter, Reply};

use crate::{config::ServerConfig, context::MatchContextRef, handler};

pub fn routes(
    config: &ServerConfig,
    context_ref: MatchContextRef,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    // bodies without Content-Length are refused with 411
    let max_body_bytes = config.max_body_bytes;

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handler::health_handler);

    let match_data = warp::path("match-data").and(warp::path::end());

    let list = match_data
        .clone()
        .and(warp::get())
        .and(with_context(context_ref.clone()))
        .and_then(handler::list_handler);

    let insert = match_data
        .clone()
        .and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::body::bytes())
        .and(with_context(context_ref.clone()))
        .and_then(handler::insert_handler);

    let clear = match_data
        .and(warp::delete())
        .and(with_context(context_ref))
        .and_then(handler::clear_handler);

    let resolve = warp::path!("grid" / "resolve")
        .and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::body::bytes())
        .and_then(handler::resolve_handler);

    let api_routes = warp::path("api").and(
        health
            .or(list)
            .or(insert)
            .or(clear)
            .or(resolve),
    );

    api_routes
        .with(warp::cors().allow_any_origin().allow_methods(vec!["GET", "POST", "DELETE"]).allow_header("content-type"))
        .with(warp::trace::request())
}

fn with_context(context_ref: MatchContextRef) -> impl Filter<Extract = (MatchContextRef,), Error = Infallible> + Clone {
    warp::any().map(move || context_ref.clone())
}
