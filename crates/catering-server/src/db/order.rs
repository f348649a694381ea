use std::collections::BTreeMap;

use catering_core::Calculations;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    db::get_db,
    error::{AppError, Result},
    models::order::{Order, OrderUpdate},
};

/// Create order table
pub async fn create_order_table() -> Result<()> {
    let query = r#"
        DEFINE TABLE IF NOT EXISTS orders SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS order_id          ON TABLE orders TYPE string ASSERT $value != "";
        DEFINE FIELD IF NOT EXISTS client_name       ON TABLE orders TYPE string ASSERT $value != "";
        DEFINE FIELD IF NOT EXISTS phone             ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS address           ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS event_date        ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS event_time        ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS guest_count       ON TABLE orders TYPE int ASSERT $value > 0;
        DEFINE FIELD IF NOT EXISTS event_type        ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS special_requests  ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS category_id       ON TABLE orders TYPE int;
        DEFINE FIELD IF NOT EXISTS selections        ON TABLE orders FLEXIBLE TYPE object;
        DEFINE FIELD IF NOT EXISTS ingredient_totals ON TABLE orders FLEXIBLE TYPE object;
        DEFINE FIELD IF NOT EXISTS equipment_totals  ON TABLE orders FLEXIBLE TYPE object;
        DEFINE FIELD IF NOT EXISTS status            ON TABLE orders TYPE string
            ASSERT $value IN ['pending', 'confirmed', 'completed', 'cancelled'];
        DEFINE FIELD IF NOT EXISTS created_at        ON TABLE orders TYPE string;
        DEFINE FIELD IF NOT EXISTS updated_at        ON TABLE orders TYPE string;

        DEFINE INDEX IF NOT EXISTS order_id_idx   ON TABLE orders COLUMNS order_id UNIQUE;
        DEFINE INDEX IF NOT EXISTS status_idx     ON TABLE orders COLUMNS status;
        DEFINE INDEX IF NOT EXISTS created_at_idx ON TABLE orders COLUMNS created_at;
    "#;

    let db = get_db();
    db.query(query).await?;
    Ok(())
}

pub async fn create_order(order: Order) -> Result<Order> {
    let db = get_db();
    let created: Option<Order> = db
        .create(("orders", order.order_id.clone()))
        .content(order)
        .await?;

    created.ok_or_else(|| AppError::Internal("Failed to create order".into()))
}

pub async fn get_order_by_id(order_id: &str) -> Result<Option<Order>> {
    let db = get_db();
    let order: Option<Order> = db.select(("orders", order_id.to_string())).await?;
    Ok(order)
}

/// Newest orders first, like the original order book.
pub async fn list_orders() -> Result<Vec<Order>> {
    let db = get_db();
    let mut response = db
        .query("SELECT * FROM orders ORDER BY created_at DESC")
        .await?;
    let orders: Vec<Order> = response.take(0)?;
    Ok(orders)
}

#[derive(Serialize)]
struct OrderPatch {
    #[serde(flatten)]
    update: OrderUpdate,
    updated_at: DateTime<Utc>,
}

pub async fn update_order(order_id: &str, update: OrderUpdate) -> Result<Option<Order>> {
    let db = get_db();
    let updated: Option<Order> = db
        .update(("orders", order_id.to_string()))
        .merge(OrderPatch {
            update,
            updated_at: Utc::now(),
        })
        .await?;
    Ok(updated)
}

#[derive(Serialize)]
struct TotalsPatch {
    ingredient_totals: BTreeMap<String, f64>,
    equipment_totals: BTreeMap<String, f64>,
    updated_at: DateTime<Utc>,
}

/// Stores freshly recomputed totals on an order; the persisted snapshot is
/// what keeps historical prints stable.
pub async fn set_order_totals(order_id: &str, calculations: Calculations) -> Result<Option<Order>> {
    let db = get_db();
    let updated: Option<Order> = db
        .update(("orders", order_id.to_string()))
        .merge(TotalsPatch {
            ingredient_totals: calculations.ingredients,
            equipment_totals: calculations.equipment,
            updated_at: Utc::now(),
        })
        .await?;
    Ok(updated)
}

pub async fn delete_order(order_id: &str) -> Result<Option<Order>> {
    let db = get_db();
    let deleted: Option<Order> = db.delete(("orders", order_id.to_string())).await?;
    Ok(deleted)
}

pub async fn delete_all_orders() -> Result<()> {
    let db = get_db();
    let _: Vec<Order> = db.delete("orders").await?;
    Ok(())
}
