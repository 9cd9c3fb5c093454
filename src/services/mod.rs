//! Service layer: the operations with real business rules. Plain CRUD for
//! reference data lives directly in the handlers.

pub mod audit;
pub mod payments;
pub mod po_details;
pub mod purchase_orders;
pub mod references;
pub mod touches;
pub mod work_orders;

use sea_orm::{DbErr, RuntimeErr, SqlErr};

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// SQLite reports deferred foreign-key failures with extended result codes
/// (787, 1811) that `sql_err()` leaves unclassified, so the raw driver
/// error is inspected as well.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }
    let sqlx_err = match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e,
        _ => return false,
    };
    sqlx_err.as_database_error().is_some_and(|db_err| {
        matches!(db_err.code().as_deref(), Some("787") | Some("1811"))
            || db_err.message().contains("FOREIGN KEY constraint failed")
    })
}
