use catering_core::EquipmentRatio;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    db::get_db,
    error::{AppError, Result},
    models::manufacturing_item::{
        ManufacturingItem, ManufacturingItemCreate, ManufacturingItemUpdate,
    },
};

/// Create manufacturing item table
pub async fn create_manufacturing_item_table() -> Result<()> {
    let query = r#"
        DEFINE TABLE IF NOT EXISTS manufacturing_items SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS item_id          ON TABLE manufacturing_items TYPE int ASSERT $value > 0;
        DEFINE FIELD IF NOT EXISTS name             ON TABLE manufacturing_items TYPE string ASSERT $value != "";
        DEFINE FIELD IF NOT EXISTS units_per_batch  ON TABLE manufacturing_items TYPE number ASSERT $value > 0;
        DEFINE FIELD IF NOT EXISTS people_per_batch ON TABLE manufacturing_items TYPE int ASSERT $value > 0;
        DEFINE FIELD IF NOT EXISTS created_at       ON TABLE manufacturing_items TYPE string;
        DEFINE FIELD IF NOT EXISTS updated_at       ON TABLE manufacturing_items TYPE string;

        DEFINE INDEX IF NOT EXISTS item_id_idx ON TABLE manufacturing_items COLUMNS item_id UNIQUE;
    "#;

    let db = get_db();
    db.query(query).await?;
    Ok(())
}

async fn next_item_id() -> Result<i64> {
    let db = get_db();
    let mut response = db
        .query("SELECT VALUE item_id FROM manufacturing_items ORDER BY item_id DESC LIMIT 1")
        .await?;
    let ids: Vec<i64> = response.take(0)?;
    Ok(ids.first().map_or(1, |last| last + 1))
}

pub async fn create_manufacturing_item(
    input: ManufacturingItemCreate,
) -> Result<ManufacturingItem> {
    let db = get_db();
    let now = Utc::now();
    let item = ManufacturingItem {
        item_id: next_item_id().await?,
        name: input.name,
        units_per_batch: input.units_per_batch,
        people_per_batch: input.people_per_batch,
        created_at: now,
        updated_at: now,
    };

    let created: Option<ManufacturingItem> = db
        .create(("manufacturing_items", item.item_id))
        .content(item)
        .await?;

    created.ok_or_else(|| AppError::Internal("Failed to create manufacturing item".into()))
}

pub async fn get_manufacturing_item_by_id(item_id: i64) -> Result<Option<ManufacturingItem>> {
    let db = get_db();
    let item: Option<ManufacturingItem> = db.select(("manufacturing_items", item_id)).await?;
    Ok(item)
}

pub async fn list_manufacturing_items() -> Result<Vec<ManufacturingItem>> {
    let db = get_db();
    let mut response = db
        .query("SELECT * FROM manufacturing_items ORDER BY item_id ASC")
        .await?;
    let items: Vec<ManufacturingItem> = response.take(0)?;
    Ok(items)
}

/// The current equipment table in the form the calculator consumes.
pub async fn list_equipment_ratios() -> Result<Vec<EquipmentRatio>> {
    let items = list_manufacturing_items().await?;
    Ok(items.iter().map(ManufacturingItem::ratio).collect())
}

#[derive(Serialize)]
struct ManufacturingItemPatch {
    #[serde(flatten)]
    update: ManufacturingItemUpdate,
    updated_at: DateTime<Utc>,
}

pub async fn update_manufacturing_item(
    item_id: i64,
    update: ManufacturingItemUpdate,
) -> Result<Option<ManufacturingItem>> {
    let db = get_db();
    let updated: Option<ManufacturingItem> = db
        .update(("manufacturing_items", item_id))
        .merge(ManufacturingItemPatch {
            update,
            updated_at: Utc::now(),
        })
        .await?;
    Ok(updated)
}

pub async fn delete_manufacturing_item(item_id: i64) -> Result<Option<ManufacturingItem>> {
    let db = get_db();
    let deleted: Option<ManufacturingItem> = db.delete(("manufacturing_items", item_id)).await?;
    Ok(deleted)
}

pub async fn delete_all_manufacturing_items() -> Result<()> {
    let db = get_db();
    let _: Vec<ManufacturingItem> = db.delete("manufacturing_items").await?;
    Ok(())
}
