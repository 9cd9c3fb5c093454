//! Database entities for the two bounded contexts: Business (customers,
//! catalog, purchase orders) and Production (work orders and stage records).

pub mod packaging;

pub mod customer;
pub mod employee;
pub mod material;
pub mod payment;
pub mod po_change_log;
pub mod po_detail;
pub mod position;
pub mod product;
pub mod product_type;
pub mod purchase_order;
pub mod reference;

pub mod extrusion;
pub mod extrusion_raw_material;
pub mod handicraft;
pub mod machine;
pub mod printing;
pub mod raw_material;
pub mod sealing;
pub mod supplier;
pub mod touch;
pub mod touch_detail;
pub mod work_order;
