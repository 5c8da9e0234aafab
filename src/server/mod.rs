//! HTTP front end.
//!
//! Routes map one-to-one onto contact service calls. Forms reach the PUT and
//! DELETE routes through the method-override middleware, which runs before
//! routing.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod method_override;
pub mod views;

pub use error::AppError;
pub use views::Views;

use crate::services::ContactService;
use crate::session::FlashStore;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    pub flash: FlashStore,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, flash: FlashStore, views: Views) -> Self {
        Self {
            contacts,
            flash,
            views: Arc::new(views),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route(
            "/contact",
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/contact/add", get(handlers::add_contact_form))
        .route("/contact/edit/{name}", get(handlers::edit_contact_form))
        .route("/contact/{name}", get(handlers::show_contact))
        .fallback(handlers::not_found)
        .with_state(state);

    // The override has to run before the router picks a route, so it wraps
    // the routed service instead of being a route layer.
    Router::new()
        .fallback_service(routes)
        .layer(axum::middleware::from_fn(method_override::method_override))
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn run_server(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Contact App | http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Contact App stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
