pub mod system_routes;
pub mod vehicle_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación con middleware aplicado
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(state.config.cors_origins.as_deref());

    Router::new()
        .merge(system_routes::create_system_router())
        .merge(vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
