use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    db::get_db,
    error::{AppError, Result},
    models::category::{Category, CategoryCreate, CategoryUpdate},
};

/// Create category table
pub async fn create_category_table() -> Result<()> {
    let query = r#"
        DEFINE TABLE IF NOT EXISTS categories SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS category_id ON TABLE categories TYPE int ASSERT $value > 0;
        DEFINE FIELD IF NOT EXISTS name        ON TABLE categories TYPE string ASSERT $value != "";
        DEFINE FIELD IF NOT EXISTS description ON TABLE categories TYPE string;
        DEFINE FIELD IF NOT EXISTS items       ON TABLE categories FLEXIBLE TYPE array;
        DEFINE FIELD IF NOT EXISTS created_at  ON TABLE categories TYPE string;
        DEFINE FIELD IF NOT EXISTS updated_at  ON TABLE categories TYPE string;

        DEFINE INDEX IF NOT EXISTS category_id_idx ON TABLE categories COLUMNS category_id UNIQUE;
    "#;

    let db = get_db();
    db.query(query).await?;
    Ok(())
}

/// Next free category id; the reference catalog counts from 1.
async fn next_category_id() -> Result<i64> {
    let db = get_db();
    let mut response = db
        .query("SELECT VALUE category_id FROM categories ORDER BY category_id DESC LIMIT 1")
        .await?;
    let ids: Vec<i64> = response.take(0)?;
    Ok(ids.first().map_or(1, |last| last + 1))
}

pub async fn create_category(input: CategoryCreate) -> Result<Category> {
    let db = get_db();
    let now = Utc::now();
    let category = Category {
        category_id: next_category_id().await?,
        name: input.name,
        description: input.description,
        items: input.items,
        created_at: now,
        updated_at: now,
    };

    let created: Option<Category> = db
        .create(("categories", category.category_id))
        .content(category)
        .await?;

    created.ok_or_else(|| AppError::Internal("Failed to create category".into()))
}

pub async fn get_category_by_id(category_id: i64) -> Result<Option<Category>> {
    let db = get_db();
    let category: Option<Category> = db.select(("categories", category_id)).await?;
    Ok(category)
}

pub async fn list_categories() -> Result<Vec<Category>> {
    let db = get_db();
    let mut response = db
        .query("SELECT * FROM categories ORDER BY category_id ASC")
        .await?;
    let categories: Vec<Category> = response.take(0)?;
    Ok(categories)
}

#[derive(Serialize)]
struct CategoryPatch {
    #[serde(flatten)]
    update: CategoryUpdate,
    updated_at: DateTime<Utc>,
}

pub async fn update_category(
    category_id: i64,
    update: CategoryUpdate,
) -> Result<Option<Category>> {
    let db = get_db();
    let updated: Option<Category> = db
        .update(("categories", category_id))
        .merge(CategoryPatch {
            update,
            updated_at: Utc::now(),
        })
        .await?;
    Ok(updated)
}

pub async fn delete_category(category_id: i64) -> Result<Option<Category>> {
    let db = get_db();
    let deleted: Option<Category> = db.delete(("categories", category_id)).await?;
    Ok(deleted)
}

pub async fn delete_all_categories() -> Result<()> {
    let db = get_db();
    let _: Vec<Category> = db.delete("categories").await?;
    Ok(())
}
