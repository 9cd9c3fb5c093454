use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, LoaderTrait, ModelTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::entities::{customer, payment, po_detail, purchase_order, reference};
use crate::errors::ServiceError;
use crate::services::purchase_orders::{with_money_scale, PurchaseOrderWithRelations};

const MODEL: &str = "Customer";

#[derive(Debug, Deserialize, Validate)]
pub struct CustomerPayload {
    pub nit: i64,
    #[validate(length(min = 1, max = 150))]
    pub company_name: String,
    pub contact: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone_number: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub location: String,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

/// Full customer read shape: the account plus its catalog and order
/// history, two levels deep.
#[derive(Debug, Serialize)]
struct CustomerWithRelations {
    #[serde(flatten)]
    customer: customer::Model,
    references: Vec<reference::Model>,
    purchase_orders: Vec<PurchaseOrderWithRelations>,
}

async fn load_orders_with_relations(
    db: &DbPool,
    orders: Vec<purchase_order::Model>,
) -> Result<Vec<PurchaseOrderWithRelations>, ServiceError> {
    let details = orders.load_many(po_detail::Entity, db).await?;
    let payments = orders.load_one(payment::Entity, db).await?;
    Ok(orders
        .into_iter()
        .zip(details)
        .zip(payments)
        .map(|((order, details), payment)| PurchaseOrderWithRelations {
            order: with_money_scale(order),
            details,
            payment,
        })
        .collect())
}

async fn create_customer(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<CustomerPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = customer::ActiveModel {
        nit: Set(payload.nit),
        company_name: Set(payload.company_name),
        contact: Set(payload.contact),
        contact_email: Set(payload.contact_email),
        contact_phone_number: Set(payload.contact_phone_number),
        location: Set(payload.location),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_customer(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = customer::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let references = customer
        .find_related(reference::Entity)
        .all(db.as_ref())
        .await?;
    let orders = customer
        .find_related(purchase_order::Entity)
        .all(db.as_ref())
        .await?;
    let purchase_orders = load_orders_with_relations(db.as_ref(), orders).await?;
    Ok(common::fetched(CustomerWithRelations {
        customer,
        references,
        purchase_orders,
    }))
}

async fn list_customers(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let customers = customer::Entity::find().all(db.as_ref()).await?;
    let references = customers.load_many(reference::Entity, db.as_ref()).await?;
    let orders = customers
        .load_many(purchase_order::Entity, db.as_ref())
        .await?;

    let mut data = Vec::with_capacity(customers.len());
    for ((customer, references), orders) in customers
        .into_iter()
        .zip(references)
        .zip(orders)
    {
        let purchase_orders = load_orders_with_relations(db.as_ref(), orders).await?;
        data.push(CustomerWithRelations {
            customer,
            references,
            purchase_orders,
        });
    }
    Ok(common::fetched(data))
}

async fn update_customer(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CustomerPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = customer::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = customer::ActiveModel {
        id: Set(old.id),
        nit: Set(payload.nit),
        company_name: Set(payload.company_name),
        contact: Set(payload.contact),
        contact_email: Set(payload.contact_email),
        contact_phone_number: Set(payload.contact_phone_number),
        location: Set(payload.location),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_customer(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = customer::Entity::delete_by_id(id)
        .exec(db.as_ref())
        .await
        .map_err(|err| common::protect_delete(err.into(), MODEL))?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(MODEL.to_string()));
    }
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
