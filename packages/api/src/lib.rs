use std::sync::Arc;

use axum::{Json, Router, middleware::from_fn_with_state, routing::get};
use error::InternalError;
use middleware::jwt::jwt_middleware;
use serde::Serialize;
use state::{AppState, State};
use utoipa::OpenApi;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, decompression::RequestDecompressionLayer,
};

pub mod entity;
mod middleware;
mod routes;

pub mod error;
pub mod export;
pub mod openapi;
pub mod permission;
pub mod state;

pub use axum;
pub mod auth {
    pub use crate::middleware::jwt::AppUser;
}

pub use sea_orm;

pub fn construct_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .route("/", get(service_info))
        .nest("/health", routes::health::routes())
        .nest("/admin", routes::admin::routes())
        .nest("/export", routes::export::routes())
        .route(
            "/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .with_state(state.clone())
        .layer(from_fn_with_state(state.clone(), jwt_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            ServiceBuilder::new()
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        );

    Router::new().nest("/api", router)
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
}

#[tracing::instrument(name = "GET /")]
async fn service_info() -> Result<Json<ServiceInfo>, InternalError> {
    Ok(Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
