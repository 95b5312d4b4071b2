use warp::reject::Rejection;

pub mod config;
pub mod context;
pub mod handler;
pub mod match_store;
pub mod routes;
pub mod tracing_setup;

pub type Result<T> = std::result::Result<T, Rejection>;
