use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use local_ip_address::local_ip;
use match_server::{config::ServerConfig, context::MatchContext, routes::routes, tracing_setup::init_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("match server stopped: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    let context_ref = MatchContext::new_ref();
    let routes = routes(&config, context_ref);

    let addr = SocketAddr::new(IpAddr::from(Ipv4Addr::UNSPECIFIED), config.port);
    let (bound, server) = warp::serve(routes)
        .try_bind_ephemeral(addr)
        .with_context(|| format!("failed to bind to port {}, is another match server running?", config.port))?;

    info!("starting match server");
    info!("local:   http://127.0.0.1:{}", bound.port());
    match local_ip() {
        Ok(ip) => info!("network: http://{}:{}", ip, bound.port()),
        Err(e) => info!("no network address: {e}"),
    }

    server.await;
    Ok(())
}
