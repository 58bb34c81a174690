use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::cors;
use crate::api::handlers;
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::check_connection))
        .route(
            "/chamados",
            get(handlers::chamados::list_chamados).post(handlers::chamados::create_chamado),
        )
        .layer(cors::cors_layer())
        .layer(axum::middleware::from_fn(cors::origin_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
