/**
 * Router Configuration
 *
 * Builds the complete route tree: the public auth endpoints, the protected
 * sheet endpoints behind the bearer-token middleware, permissive CORS for
 * browser clients, and a JSON 404 fallback matching the error format used
 * everywhere else.
 */

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::middleware;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::handlers::{get_me, login, register};
use crate::error::AppError;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;
use crate::sheets::handlers::{create_sheet, delete_sheet, get_sheet, list_sheets, update_sheet};

/// Create the application router
///
/// # Route Details
///
/// ## Public
/// - `GET /health` - liveness probe
/// - `POST /register` - account creation
/// - `POST /login` - credential check, issues a bearer token
///
/// ## Protected (bearer token verified before dispatch)
/// - `GET /me` - current user
/// - `GET /sheets` - list own sheets
/// - `POST /sheets` - create a sheet
/// - `GET /sheets/{id}` - fetch one sheet
/// - `PUT /sheets/{id}` - merge mutable fields
/// - `DELETE /sheets/{id}` - remove a sheet
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route("/sheets", get(list_sheets).post(create_sheet))
        .route(
            "/sheets/{id}",
            get(get_sheet).put(update_sheet).delete(delete_sheet),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
        .fallback(unknown_route)
        .layer(cors_layer())
        .with_state(state)
}

/// Liveness probe, no auth required
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// JSON 404 for paths outside the route tree
async fn unknown_route() -> AppError {
    AppError::NotFound("route")
}

/// Permissive CORS so a browser frontend on any origin can call the API
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
