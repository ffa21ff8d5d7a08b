use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use fulfilment_core::StoreId;
use fulfilment_stores::{Store, StoreChangeEvent, StoreRepository};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/:id", get(get_store).put(update_store).delete(delete_store))
}

pub async fn list_stores(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .stores
        .list_all()
        .iter()
        .map(dto::store_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn create_store(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StoreRequest>,
) -> axum::response::Response {
    if body.id.is_some() {
        return errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invariant_violation",
            "Id was invalidly set on request.",
        );
    }

    let store = match Store::new(
        body.name.unwrap_or_default(),
        body.quantity_products_in_stock,
    ) {
        Ok(store) => store,
        Err(e) => return errors::domain_error_to_response(e),
    };

    services.stores.create(&store);
    services
        .store_outbox
        .enqueue(StoreChangeEvent::created(store.clone()));
    services.store_outbox.commit();

    (StatusCode::CREATED, Json(dto::store_to_json(&store))).into_response()
}

pub async fn get_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: StoreId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid store id"),
    };

    match services.stores.find_by_id(id) {
        Some(store) => (StatusCode::OK, Json(dto::store_to_json(&store))).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Store with id {id} does not exist."),
        ),
    }
}

pub async fn update_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::StoreRequest>,
) -> axum::response::Response {
    let id: StoreId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid store id"),
    };

    let mut store = match services.stores.find_by_id(id) {
        Some(store) => store,
        None => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Store with id {id} does not exist."),
            )
        }
    };

    if let Err(e) = store.rename(
        body.name.unwrap_or_default(),
        body.quantity_products_in_stock,
    ) {
        return errors::domain_error_to_response(e);
    }

    services.stores.update(&store);
    services
        .store_outbox
        .enqueue(StoreChangeEvent::updated(store.clone()));
    services.store_outbox.commit();

    (StatusCode::OK, Json(dto::store_to_json(&store))).into_response()
}

pub async fn delete_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: StoreId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid store id"),
    };

    if services.stores.find_by_id(id).is_none() {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Store with id {id} does not exist."),
        );
    }

    // Deletes are not mirrored to the legacy system.
    services.stores.delete(id);
    StatusCode::NO_CONTENT.into_response()
}
