mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn purchase_order_totals_are_derived_on_create() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;

    let (status, body) = app
        .post(
            "/api/purchase-orders",
            json!({
                "order_date": "2025-03-10",
                "customer_id": customer_id,
                "order_number": "OC-2001",
                "employee_id": employee_id,
                "subtotal": "100.00",
                "delivery_date": "2025-03-24",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["message"],
        "Purchase Order created successfully."
    );
    assert_eq!(body["data"]["iva"], "19.00");
    assert_eq!(body["data"]["total"], "119.00");
}

#[tokio::test]
async fn totals_follow_the_iva_flag_on_update() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;

    let (status, body) = app
        .put(
            &format!("/api/purchase-orders/{order_id}"),
            json!({
                "order_date": "2025-03-10",
                "customer_id": customer_id,
                "order_number": "OC-1001",
                "employee_id": employee_id,
                "subtotal": "200.00",
                "has_iva": false,
                "delivery_date": "2025-03-24",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Purchase Order updated successfully.");
    assert_eq!(body["data"]["iva"], "0.00");
    assert_eq!(body["data"]["total"], "200.00");
}

#[tokio::test]
async fn subtotal_edit_writes_exactly_one_change_log_row() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;

    let (status, body) = app
        .put(
            &format!("/api/purchase-orders/{order_id}"),
            json!({
                "order_date": "2025-03-10",
                "customer_id": customer_id,
                "order_number": "OC-1001",
                "employee_id": employee_id,
                "subtotal": "150.00",
                "has_iva": true,
                "delivery_date": "2025-03-24",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = app
        .get(&format!(
            "/api/po-change-logs?model_name=PurchaseOrder&record_id={order_id}"
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1, "{body}");
    assert_eq!(entries[0]["field_name"], "subtotal");
    assert_eq!(entries[0]["old_value"], "100.00");
    assert_eq!(entries[0]["new_value"], "150.00");
}

#[tokio::test]
async fn no_op_update_writes_no_change_log_rows() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;

    let (status, _) = app
        .put(
            &format!("/api/purchase-orders/{order_id}"),
            json!({
                "order_date": "2025-03-10",
                "customer_id": customer_id,
                "order_number": "OC-1001",
                "employee_id": employee_id,
                "subtotal": "100.00",
                "has_iva": true,
                "delivery_date": "2025-03-24",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .get(&format!(
            "/api/po-change-logs?model_name=PurchaseOrder&record_id={order_id}"
        ))
        .await;
    assert!(body["data"].as_array().unwrap().is_empty(), "{body}");
}

#[tokio::test]
async fn detail_creation_requires_an_existing_order() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;

    let (status, body) = app
        .post(
            "/api/po-details",
            po_detail_body(9999, reference_id, product_type_id, material_id),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Purchase Order does not exist.");
}

#[tokio::test]
async fn details_get_consecutive_work_order_numbers() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;

    let mut numbers = Vec::new();
    for _ in 0..3 {
        let (status, body) = app
            .post(
                "/api/po-details",
                po_detail_body(order_id, reference_id, product_type_id, material_id),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        numbers.push(body["data"]["wo_number"].as_i64().unwrap());
    }

    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn concurrent_detail_creation_never_shares_a_work_order_number() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;

    let body = || po_detail_body(order_id, reference_id, product_type_id, material_id);
    let responses = tokio::join!(
        app.post("/api/po-details", body()),
        app.post("/api/po-details", body()),
        app.post("/api/po-details", body()),
        app.post("/api/po-details", body()),
        app.post("/api/po-details", body()),
    );

    let mut numbers: Vec<i64> = [
        responses.0,
        responses.1,
        responses.2,
        responses.3,
        responses.4,
    ]
    .into_iter()
    .map(|(status, body)| {
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["wo_number"].as_i64().unwrap()
    })
    .collect();
    numbers.sort_unstable();

    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn detail_update_preserves_the_work_order_number_and_logs_the_edit() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;

    let (status, body) = app
        .post(
            "/api/po-details",
            po_detail_body(order_id, reference_id, product_type_id, material_id),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let detail_id = body["data"]["id"].as_i64().unwrap();
    let wo_number = body["data"]["wo_number"].as_i64().unwrap();

    let mut update = po_detail_body(order_id, reference_id, product_type_id, material_id);
    update["film_color"] = json!("Negro");
    let (status, body) = app
        .put(&format!("/api/po-details/{detail_id}"), update)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "P O Detail updated successfully.");
    assert_eq!(body["data"]["wo_number"].as_i64().unwrap(), wo_number);

    let (_, body) = app
        .get(&format!(
            "/api/po-change-logs?model_name=PODetail&record_id={detail_id}"
        ))
        .await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1, "{body}");
    assert_eq!(entries[0]["field_name"], "film_color");
    assert_eq!(entries[0]["old_value"], "Transparente");
    assert_eq!(entries[0]["new_value"], "Negro");
}

#[tokio::test]
async fn an_order_accepts_only_one_payment() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;

    let (status, body) = app
        .post(
            "/api/payments",
            json!({
                "purchase_order_id": order_id,
                "payment_method": "cash",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (status, body) = app
        .post(
            "/api/payments",
            json!({
                "purchase_order_id": order_id,
                "payment_method": "credit",
                "payment_term": 30,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn payment_requires_an_existing_order() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/payments",
            json!({
                "purchase_order_id": 42,
                "payment_method": "cash",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["message"], "Purchase Order does not exist.");
}

#[tokio::test]
async fn deleting_an_order_cascades_to_details_and_payment() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;
    let employee_id = seed_employee(&app).await;
    let order_id = seed_purchase_order(&app, customer_id, employee_id).await;
    let product_type_id = seed_product_type(&app, "Bolsa").await;
    let material_id = seed_material(&app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(&app, customer_id, product_type_id, material_id).await;

    let (_, body) = app
        .post(
            "/api/po-details",
            po_detail_body(order_id, reference_id, product_type_id, material_id),
        )
        .await;
    let detail_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = app
        .delete(&format!("/api/purchase-orders/{order_id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/api/po-details/{detail_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    assert_eq!(body["message"], "P O Detail not found.");
}
