use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use fulfilment_core::WarehouseId;
use fulfilment_warehouses::Warehouse;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/:id", get(get_warehouse).delete(archive_warehouse))
        .route("/:id/replacement", post(replace_warehouse))
}

pub async fn list_warehouses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .warehouse_store
        .list_active_records()
        .iter()
        .map(dto::warehouse_record_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn create_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateWarehouseRequest>,
) -> axum::response::Response {
    let candidate = Warehouse::new(body.business_unit_code, body.location, body.capacity, body.stock);

    match services.create_warehouse.create(candidate) {
        Ok(created) => (StatusCode::CREATED, Json(dto::warehouse_to_json(&created))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: WarehouseId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid warehouse id")
        }
    };

    match services.warehouse_store.find_record_by_id(id) {
        Some(record) => {
            (StatusCode::OK, Json(dto::warehouse_record_to_json(&record))).into_response()
        }
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Warehouse with id {id} not found."),
        ),
    }
}

pub async fn archive_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: WarehouseId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid warehouse id")
        }
    };

    let record = match services.warehouse_store.find_record_by_id(id) {
        Some(record) => record,
        None => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Warehouse with id {id} not found."),
            )
        }
    };

    match services
        .archive_warehouse
        .archive(&record.warehouse.business_unit_code)
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(business_unit_code): Path<String>,
    Json(body): Json<dto::ReplaceWarehouseRequest>,
) -> axum::response::Response {
    let candidate = Warehouse::new(
        business_unit_code.clone(),
        body.location,
        body.capacity,
        body.stock,
    );

    match services
        .replace_warehouse
        .replace(&business_unit_code, candidate)
    {
        Ok(replacement) => {
            (StatusCode::OK, Json(dto::warehouse_to_json(&replacement))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
