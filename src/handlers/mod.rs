//! HTTP layer: one module per resource collection, all sharing the same
//! response envelope (see `common`).

pub mod common;

pub mod customers;
pub mod employees;
pub mod extrusion_raw_materials;
pub mod extrusions;
pub mod handicrafts;
pub mod machines;
pub mod materials;
pub mod payments;
pub mod po_change_logs;
pub mod po_details;
pub mod positions;
pub mod printings;
pub mod product_types;
pub mod products;
pub mod purchase_orders;
pub mod raw_materials;
pub mod references;
pub mod sealings;
pub mod suppliers;
pub mod touch_details;
pub mod touches;
pub mod work_orders;

use std::sync::Arc;

use axum::Router;

use crate::db::DbPool;

/// Every resource collection nested under `/api`.
pub fn api_routes() -> Router<Arc<DbPool>> {
    Router::new()
        .nest("/customers", customers::routes())
        .nest("/positions", positions::routes())
        .nest("/employees", employees::routes())
        .nest("/product-types", product_types::routes())
        .nest("/materials", materials::routes())
        .nest("/products", products::routes())
        .nest("/references", references::routes())
        .nest("/purchase-orders", purchase_orders::routes())
        .nest("/payments", payments::routes())
        .nest("/po-details", po_details::routes())
        .nest("/po-change-logs", po_change_logs::routes())
        .nest("/suppliers", suppliers::routes())
        .nest("/raw-materials", raw_materials::routes())
        .nest("/machines", machines::routes())
        .nest("/work-orders", work_orders::routes())
        .nest("/extrusions", extrusions::routes())
        .nest("/extrusion-materials", extrusion_raw_materials::routes())
        .nest("/printings", printings::routes())
        .nest("/sealings", sealings::routes())
        .nest("/handicrafts", handicrafts::routes())
        .nest("/touches", touches::routes())
        .nest("/touch-details", touch_details::routes())
}
