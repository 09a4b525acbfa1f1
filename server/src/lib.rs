//! HTTP service that lists todo records from a document store.
//!
//! One route, `GET /api/todos?limit=N`. The store is injected through
//! [`AppState`], so the router runs against MongoDB in production and against
//! [`store::MemoryStore`] or a stub in tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod limit;
pub mod logging;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::Config;
pub use error::{ApiErrorBody, AppError};
pub use limit::{parse_limit, Limit, ValidationError};
pub use model::{NewTodo, Todo};
pub use store::{MemoryStore, MongoStore, StoreError, TodoStore};

pub const API_TODOS: &str = "/api/todos";

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: impl TodoStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(API_TODOS, get(handlers::list_todos))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received.");
}
