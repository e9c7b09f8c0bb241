//! HTTP route handlers and router assembly.

pub mod info;
pub mod users;

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Envelope;
use service::UserStore;

use crate::errors::ApiError;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserStore>,
    pub started_at: Instant,
    pub port: u16,
}

impl ServerState {
    pub fn new(users: Arc<UserStore>, port: u16) -> Self {
        Self {
            users,
            started_at: Instant::now(),
            port,
        }
    }
}

/// Uniform 404 for any request outside the registered (method, path)
/// table. Wired both as the router fallback and as each route's
/// method fallback, so an unregistered method on a known path gets the
/// same envelope as an unknown path.
async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Terminal failure path: log the fault server-side, return the generic
/// 500 envelope with no internal detail.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };
    tracing::error!(error = %detail, "unhandled fault in request handler");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::error("Something went wrong!")),
    )
        .into_response()
}

/// Build the full application router: the HTML index, the informational
/// API, the user CRUD API, the 404 fallback, and the middleware stack.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(info::index).fallback(route_not_found))
        .route("/api/hello", get(info::hello).fallback(route_not_found))
        .route("/api/version", get(info::version).fallback(route_not_found))
        .route("/api/health", get(info::health).fallback(route_not_found))
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
