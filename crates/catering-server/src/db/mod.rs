pub mod category;
pub mod manufacturing_item;
pub mod order;
pub mod seed;

use std::sync::LazyLock;

use serde::Deserialize;
use surrealdb::{engine::any::Any, opt::auth::Root, Surreal};

use crate::error::Result;

/// Struct representing the SurrealDB configuration parameters.
#[derive(Debug, Deserialize)]
pub struct SurrealdbCfg {
    /// `mem://` for the embedded store, `ws://host:port` for a remote one
    pub endpoint: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub namespace: String,
    pub database: String,
}

static DB: LazyLock<Surreal<Any>> = LazyLock::new(Surreal::init);

pub async fn init_db(cfg: SurrealdbCfg) -> Result<()> {
    DB.connect(&cfg.endpoint).await?;
    // The embedded engine has no authentication layer
    if !cfg.endpoint.starts_with("mem") {
        DB.signin(Root {
            username: &cfg.username,
            password: &cfg.password,
        })
        .await?;
    }
    DB.use_ns(cfg.namespace).use_db(cfg.database).await?;
    Ok(())
}

pub fn get_db() -> &'static Surreal<Any> {
    &DB
}

pub async fn create_tables() -> Result<()> {
    category::create_category_table().await?;
    manufacturing_item::create_manufacturing_item_table().await?;
    order::create_order_table().await?;
    Ok(())
}

/// Seeds the reference catalog into empty tables only; deployments that
/// already hold data are left alone. Safe to call on every startup.
pub async fn initialize_default_data() -> Result<()> {
    let db = get_db();

    let mut response = db.query("SELECT count() FROM categories").await?;
    let category_rows: Vec<serde_json::Value> = response.take(0)?;
    if category_rows.is_empty() {
        tracing::info!("Categories table is empty, seeding default menus...");
        seed::seed_categories().await?;
    } else {
        tracing::debug!("Categories table already has data, skipping seed");
    }

    let mut response = db.query("SELECT count() FROM manufacturing_items").await?;
    let item_rows: Vec<serde_json::Value> = response.take(0)?;
    if item_rows.is_empty() {
        tracing::info!("Manufacturing items table is empty, seeding equipment ratios...");
        seed::seed_manufacturing_items().await?;
    } else {
        tracing::debug!("Manufacturing items table already has data, skipping seed");
    }

    Ok(())
}
