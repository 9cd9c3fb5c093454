mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn reference_label_is_computed_from_the_spec() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;

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
    assert_eq!(body["data"]["reference"], "BOLSA PEBD 20 x 30 CM");
}

#[tokio::test]
async fn label_is_rebuilt_on_update() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;

    let (status, body) = app
        .put(
            &format!("/api/references/{reference_id}"),
            json!({
                "customer_id": customer_id,
                "product_type_id": product_type_id,
                "material_id": material_id,
                "width": "25",
                "length": "35",
                "caliber": "3",
                "tape": "resealable",
                "film_color": "Transparente",
                "roller_size": "0",
                "pantones_quantity": 0,
                "sketch_url": "",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body["data"]["reference"],
        "BOLSA PEBD 25 x 35 CM CAL 3 CINTA RES"
    );
}

#[tokio::test]
async fn tubular_references_have_no_length_term() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let product_type_id = seed_product_type(&app, "Tubular").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;

    let (status, body) = app
        .post(
            "/api/references",
            json!({
                "customer_id": customer_id,
                "product_type_id": product_type_id,
                "material_id": material_id,
                "width": "40",
                "length": "100",
                "caliber": "0",
                "film_color": "Transparente",
                "roller_size": "0",
                "pantones_quantity": 0,
                "sketch_url": "",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["reference"], "TUBULAR PEBD 40 CM");
}

#[tokio::test]
async fn referenced_material_cannot_be_deleted() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    seed_reference(&app, customer_id, product_type_id, material_id).await;

    let (status, body) = app
        .delete(&format!("/api/materials/{material_id}"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Failed to delete material.");

    // Still there.
    let (status, _) = app.get(&format!("/api/materials/{material_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn validation_failure_uses_the_error_envelope() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/customers",
            json!({
                "nit": 900123456_i64,
                "company_name": "",
                "location": "Cali",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Failed to create customer.");
    assert!(body["errors"].get("company_name").is_some(), "{body}");
}

#[tokio::test]
async fn customer_read_embeds_catalog_and_order_history() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;

    let (_, body) = app
        .post(
            "/api/po-details",
            po_detail_body(order_id, reference_id, product_type_id, material_id),
        )
        .await;
    assert_eq!(body["status"], "success", "{body}");
    let (_, body) = app
        .post(
            "/api/payments",
            json!({ "purchase_order_id": order_id, "payment_method": "cash" }),
        )
        .await;
    assert_eq!(body["status"], "success", "{body}");

    let (status, body) = app.get(&format!("/api/customers/{customer_id}")).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let data = &body["data"];
    assert_eq!(data["references"].as_array().unwrap().len(), 1);
    let orders = data["purchase_orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["details"].as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["payment"]["payment_method"], "cash");
}

#[tokio::test]
async fn position_read_embeds_employees() {
    let app = TestApp::new().await;
    seed_employee(&app).await;

    let (status, body) = app.get("/api/positions").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let positions = body["data"].as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["employees"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_record_returns_the_not_found_envelope() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/references/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Reference not found.");
}
