use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use fulfilment_core::ProductId;
use fulfilment_products::{Product, ProductRepository};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .products
        .list_all()
        .iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    if body.id.is_some() {
        return errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invariant_violation",
            "Id was invalidly set on request.",
        );
    }

    let product = match Product::new(
        body.name.unwrap_or_default(),
        body.description,
        body.price,
        body.stock,
    ) {
        Ok(product) => product,
        Err(e) => return errors::domain_error_to_response(e),
    };

    services.products.create(&product);
    (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.products.find_by_id(id) {
        Some(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Product with id {id} does not exist."),
        ),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    let mut product = match services.products.find_by_id(id) {
        Some(product) => product,
        None => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Product with id {id} does not exist."),
            )
        }
    };

    if let Err(e) = product.apply_update(
        body.name.unwrap_or_default(),
        body.description,
        body.price,
        body.stock,
    ) {
        return errors::domain_error_to_response(e);
    }

    services.products.update(&product);
    (StatusCode::OK, Json(dto::product_to_json(&product))).into_response()
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    if services.products.find_by_id(id).is_none() {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Product with id {id} does not exist."),
        );
    }

    services.products.delete(id);
    StatusCode::NO_CONTENT.into_response()
}
