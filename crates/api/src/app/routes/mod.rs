use axum::Router;

pub mod products;
pub mod stores;
pub mod system;
pub mod warehouses;

/// Router for all domain endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/warehouse", warehouses::router())
        .nest("/store", stores::router())
        .nest("/product", products::router())
}
