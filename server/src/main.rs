use tokio::net::TcpListener;
use tracing::info;

use todo_server::{config::Config, logging, store, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logging::init(&cfg.loglevel)?;

    info!(
        listen_addr = %cfg.listen_addr,
        listen_port = cfg.listen_port,
        store = ?cfg.store,
        loglevel = %cfg.loglevel
    );

    let state = AppState::from_shared(store::open(&cfg).await?);

    let addr = cfg.listen_socket();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    todo_server::run(listener, state).await?;
    info!("Server has shut down gracefully.");
    Ok(())
}
