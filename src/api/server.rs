use std::future::Future;
use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::decompression::RequestDecompressionLayer;
use tracing::info;

use super::{
    services::{
        get_order_tracking, get_order_tracking_editor, get_shipper_settings, health, list_shippers, put_order_tracking,
        put_shipper_settings, take_notices,
    },
    state::AppState,
};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/settings/shippers",
            get(get_shipper_settings).put(put_shipper_settings),
        )
        .route("/shippers", get(list_shippers))
        .route(
            "/orders/{order_id}/tracking",
            get(get_order_tracking).put(put_order_tracking),
        )
        .route(
            "/orders/{order_id}/tracking/edit",
            get(get_order_tracking_editor),
        )
        .route("/admin/notices", get(take_notices))
        .route("/health", get(health))
        .with_state(state)
        // Automatically decompress gzip request bodies
        .layer(RequestDecompressionLayer::new())
}

pub async fn run(state: AppState, address: SocketAddr) -> Result<(), AnyError> {
    let listener = TcpListener::bind(address).await?;
    info!(%address, "ordertrack API listening");

    serve(state, listener, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then flush the store
pub async fn serve<F>(state: AppState, listener: TcpListener, shutdown: F) -> Result<(), AnyError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = state.store.clone();
    let app = router(state);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    store.persist()?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received");
}
