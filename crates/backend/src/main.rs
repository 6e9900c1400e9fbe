pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let state = system::app_state::AppState::from_config(&config);
    let app = routes::configure_routes(state, &config.server);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Serving {} and the API on http://{}",
        config.server.static_dir,
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
