use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use plastix_api::db::DbPool;

/// Test harness over an in-memory SQLite database with the full migration
/// set applied. A single pooled connection keeps the in-memory database
/// alive and shared across requests.
pub struct TestApp {
    router: Router,
    pub db: Arc<DbPool>,
}

impl TestApp {
    pub async fn new() -> Self {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt)
            .await
            .expect("failed to open in-memory database");
        migrations::Migrator::up(&db, None)
            .await
            .expect("migrations failed");
        let db = Arc::new(db);
        TestApp {
            router: plastix_api::app(db.clone()),
            db,
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                builder.body(Body::from(value.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("non-JSON response body")
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}

fn id_of(body: &Value) -> i32 {
    body["data"]["id"].as_i64().expect("missing data.id") as i32
}

pub async fn seed_customer(app: &TestApp) -> i32 {
    let (status, body) = app
        .post(
            "/api/customers",
            json!({
                "nit": 900123456_i64,
                "company_name": "Distribuciones El Roble",
                "location": "Cali",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

pub async fn seed_employee(app: &TestApp) -> i32 {
    let (status, body) = app
        .post(
            "/api/positions",
            json!({ "name": "Vendedor" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let position_id = id_of(&body);

    let (status, body) = app
        .post(
            "/api/employees",
            json!({
                "first_name": "Laura",
                "last_name": "Mejia",
                "phone_number": "3001234567",
                "entity": "CC",
                "position_id": position_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

pub async fn seed_product_type(app: &TestApp, name: &str) -> i32 {
    let (status, body) = app
        .post("/api/product-types", json!({ "name": name }))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

pub async fn seed_material(app: &TestApp, name: &str, weight_constant: &str) -> i32 {
    let (status, body) = app
        .post(
            "/api/materials",
            json!({ "name": name, "weight_constant": weight_constant }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

pub async fn seed_reference(
    app: &TestApp,
    customer_id: i32,
    product_type_id: i32,
    material_id: i32,
) -> i32 {
    let (status, body) = app
        .post(
            "/api/references",
            json!({
                "customer_id": customer_id,
                "product_type_id": product_type_id,
                "material_id": material_id,
                "width": "20",
                "length": "30",
                "caliber": "0",
                "film_color": "Transparente",
                "roller_size": "0",
                "pantones_quantity": 0,
                "sketch_url": "",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

pub async fn seed_purchase_order(app: &TestApp, customer_id: i32, employee_id: i32) -> i32 {
    let (status, body) = app
        .post(
            "/api/purchase-orders",
            json!({
                "order_date": "2025-03-10",
                "customer_id": customer_id,
                "order_number": "OC-1001",
                "employee_id": employee_id,
                "subtotal": "100.00",
                "delivery_date": "2025-03-24",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

/// Minimal valid detail body; callers override what the test cares about.
pub fn po_detail_body(
    purchase_order_id: i32,
    reference_id: i32,
    product_type_id: i32,
    material_id: i32,
) -> Value {
    json!({
        "purchase_order_id": purchase_order_id,
        "reference_id": reference_id,
        "reference_internal": "BOLSA PEBD 20 x 30 CM",
        "product_type_id": product_type_id,
        "material_id": material_id,
        "width": "20",
        "length": "30",
        "caliber": "2",
        "film_color": "Transparente",
        "kilograms": "0",
        "units": 10000,
        "kilogram_price": "9500",
        "unit_price": "0",
        "roller_size": "0",
        "pantones_quantity": 0,
        "delivery_location": "Bodega principal",
        "sketch_url": "",
    })
}
