mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::*;

fn decimal_field(value: &Value) -> f64 {
    value.as_str().unwrap().parse().unwrap()
}

struct ProductionFixture {
    employee_id: i32,
    detail_id: i64,
}

/// Customer, order and one 20x30 cal-2 detail for 10000 units of a
/// 0.0306-constant material.
async fn seed_detail(app: &TestApp) -> ProductionFixture {
    let customer_id = seed_customer(app).await;
    let employee_id = seed_employee(app).await;
    let order_id = seed_purchase_order(app, customer_id, employee_id).await;
    let product_type_id = seed_product_type(app, "Bolsa").await;
    let material_id = seed_material(app, "Pebd", "0.030600").await;
    let reference_id = seed_reference(app, customer_id, product_type_id, material_id).await;

    let (status, body) = app
        .post(
            "/api/po-details",
            po_detail_body(order_id, reference_id, product_type_id, material_id),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    ProductionFixture {
        employee_id,
        detail_id: body["data"]["id"].as_i64().unwrap(),
    }
}

async fn seed_work_order(app: &TestApp, detail_id: i64) -> i64 {
    let (status, body) = app
        .post(
            "/api/work-orders",
            json!({
                "po_detail_id": detail_id,
                "surplus_percentage": "5",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn work_order_weights_are_derived_from_the_detail() {
    let app = TestApp::new().await;
    let fixture = seed_detail(&app).await;

    let (status, body) = app
        .post(
            "/api/work-orders",
            json!({
                "po_detail_id": fixture.detail_id,
                "surplus_percentage": "5",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    let data = &body["data"];
    // 20 * 30 * 2 * 0.0306 = 36.72 g/unit; 10000 units -> 367.2 -> 368 kg
    assert_eq!(decimal_field(&data["unit_weight"]), 36.72);
    assert_eq!(decimal_field(&data["surplus_weight"]), 18.4);
    assert_eq!(decimal_field(&data["wo_weight"]), 386.4);
    assert_eq!(data["status"], "unstarted");
}

#[tokio::test]
async fn work_order_update_recomputes_the_weights() {
    let app = TestApp::new().await;
    let fixture = seed_detail(&app).await;
    let work_order_id = seed_work_order(&app, fixture.detail_id).await;

    let (status, body) = app
        .put(
            &format!("/api/work-orders/{work_order_id}"),
            json!({
                "po_detail_id": fixture.detail_id,
                "surplus_percentage": "10",
                "status": "extrusion",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let data = &body["data"];
    assert_eq!(decimal_field(&data["surplus_weight"]), 36.8);
    assert_eq!(decimal_field(&data["wo_weight"]), 404.8);
    assert_eq!(data["status"], "extrusion");
}

#[tokio::test]
async fn touch_totals_track_the_child_rows() {
    let app = TestApp::new().await;
    let fixture = seed_detail(&app).await;
    let work_order_id = seed_work_order(&app, fixture.detail_id).await;

    let (status, body) = app
        .post(
            "/api/touches",
            json!({
                "work_order_id": work_order_id,
                "area": "sealing",
                "theorical_quantity": 10000,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let touch_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(decimal_field(&body["data"]["total_finished_weight"]), 0.0);

    let mut detail_ids = Vec::new();
    for (weight, units, waste) in [("120.5", 3200, "1.25"), ("80.0", 2100, "0.75")] {
        let (status, body) = app
            .post(
                "/api/touch-details",
                json!({
                    "touch_id": touch_id,
                    "employee_id": fixture.employee_id,
                    "finished_weight": weight,
                    "finished_units": units,
                    "waste_weight": waste,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        detail_ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let (_, body) = app.get(&format!("/api/touches/{touch_id}")).await;
    let data = &body["data"];
    assert_eq!(decimal_field(&data["total_finished_weight"]), 200.5);
    assert_eq!(data["total_finished_units"].as_i64().unwrap(), 5300);
    assert_eq!(decimal_field(&data["total_waste_weight"]), 2.0);
    assert_eq!(data["details"].as_array().unwrap().len(), 2);

    // Removing every child resets the totals, not just the last delta.
    for id in detail_ids {
        let (status, _) = app.delete(&format!("/api/touch-details/{id}")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, body) = app.get(&format!("/api/touches/{touch_id}")).await;
    let data = &body["data"];
    assert_eq!(decimal_field(&data["total_finished_weight"]), 0.0);
    assert_eq!(data["total_finished_units"].as_i64().unwrap(), 0);
    assert_eq!(decimal_field(&data["total_waste_weight"]), 0.0);
}

#[tokio::test]
async fn touch_detail_edit_rerolls_the_totals() {
    let app = TestApp::new().await;
    let fixture = seed_detail(&app).await;
    let work_order_id = seed_work_order(&app, fixture.detail_id).await;

    let (_, body) = app
        .post(
            "/api/touches",
            json!({
                "work_order_id": work_order_id,
                "theorical_quantity": 5000,
            }),
        )
        .await;
    let touch_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = app
        .post(
            "/api/touch-details",
            json!({
                "touch_id": touch_id,
                "employee_id": fixture.employee_id,
                "finished_weight": "50.0",
                "finished_units": 1000,
                "waste_weight": "0.5",
            }),
        )
        .await;
    let detail_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/touch-details/{detail_id}"),
            json!({
                "touch_id": touch_id,
                "employee_id": fixture.employee_id,
                "finished_weight": "75.0",
                "finished_units": 1500,
                "waste_weight": "0.5",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, body) = app.get(&format!("/api/touches/{touch_id}")).await;
    assert_eq!(decimal_field(&body["data"]["total_finished_weight"]), 75.0);
    assert_eq!(body["data"]["total_finished_units"].as_i64().unwrap(), 1500);
}

#[tokio::test]
async fn extrusion_records_attach_to_a_work_order() {
    let app = TestApp::new().await;
    let fixture = seed_detail(&app).await;
    let work_order_id = seed_work_order(&app, fixture.detail_id).await;

    let (status, body) = app
        .post(
            "/api/machines",
            json!({ "name": "Extrusora 1", "area": "extrusion" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let machine_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .post(
            "/api/extrusions",
            json!({
                "work_order_id": work_order_id,
                "machine_id": machine_id,
                "roll_type": "tubular",
                "rolls_quantity": 4,
                "caliber": "2",
                "observations": "",
                "next": "sealing",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let extrusion_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .post(
            "/api/raw-materials",
            json!({
                "name": "Pebd virgen",
                "quantity": "1000",
                "raw_material_type": "prime",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let raw_material_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .post(
            "/api/extrusion-materials",
            json!({
                "extrusion_id": extrusion_id,
                "raw_material_id": raw_material_id,
                "quantity": "380.5",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(
        body["message"],
        "Extrusion Raw Material created successfully."
    );
}

#[tokio::test]
async fn work_order_detail_cannot_be_deleted_while_tracked() {
    let app = TestApp::new().await;
    let fixture = seed_detail(&app).await;
    seed_work_order(&app, fixture.detail_id).await;

    let (status, body) = app
        .delete(&format!("/api/po-details/{}", fixture.detail_id))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["message"], "Failed to delete p o detail.");
}
