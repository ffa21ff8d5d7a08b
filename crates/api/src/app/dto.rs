use serde::Deserialize;

use fulfilment_infra::WarehouseRecord;
use fulfilment_products::Product;
use fulfilment_stores::Store;
use fulfilment_warehouses::Warehouse;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: u32,
    pub stock: u32,
}

/// Replacement body: the business unit code comes from the path, never the
/// body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceWarehouseRequest {
    pub location: String,
    pub capacity: u32,
    pub stock: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub quantity_products_in_stock: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    #[serde(default)]
    pub stock: u32,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn warehouse_to_json(warehouse: &Warehouse) -> serde_json::Value {
    serde_json::json!({
        "businessUnitCode": warehouse.business_unit_code,
        "location": warehouse.location,
        "capacity": warehouse.capacity,
        "stock": warehouse.stock,
        "createdAt": warehouse.created_at.map(|t| t.to_rfc3339()),
    })
}

pub fn warehouse_record_to_json(record: &WarehouseRecord) -> serde_json::Value {
    let mut value = warehouse_to_json(&record.warehouse);
    value["id"] = serde_json::Value::String(record.id.to_string());
    value
}

pub fn store_to_json(store: &Store) -> serde_json::Value {
    serde_json::json!({
        "id": store.id.to_string(),
        "name": store.name,
        "quantityProductsInStock": store.quantity_products_in_stock,
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "name": product.name,
        "description": product.description,
        "price": product.price,
        "stock": product.stock,
    })
}
