//! Reference catalog: the three default bhajiya/chaat menus and the fixed
//! equipment ratio table the business deploys with.

use catering_core::{ItemKind, MenuItem};
use chrono::Utc;

use crate::{
    db::get_db,
    error::Result,
    models::{category::Category, manufacturing_item::ManufacturingItem},
};

fn item(
    id: i64,
    name: &str,
    ingredients: &[&str],
    base_quantity: f64,
    kind: Option<ItemKind>,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        base_quantity,
        kind,
    }
}

pub fn default_categories() -> Vec<Category> {
    let now = Utc::now();
    vec![
        Category {
            category_id: 1,
            name: "Bhajiya Only".to_string(),
            description: "Only bhajiya varieties".to_string(),
            items: vec![
                item(1, "Methi Bhajiya", &["methi", "besan", "oil"], 100.0, None),
                item(2, "Marcha Bhajiya", &["green chilli", "besan", "oil"], 80.0, None),
                item(3, "Kanda Bhajiya", &["onion", "besan", "oil"], 120.0, None),
                item(4, "Batata Bhajiya", &["potato", "besan", "oil"], 150.0, None),
                item(5, "Palak Bhajiya", &["spinach", "besan", "oil"], 90.0, None),
            ],
            created_at: now,
            updated_at: now,
        },
        Category {
            category_id: 2,
            name: "Bhajiya With Chaat".to_string(),
            description: "Bhajiya and chaat varieties".to_string(),
            items: vec![
                item(
                    1,
                    "Methi Bhajiya",
                    &["methi", "besan", "oil"],
                    100.0,
                    Some(ItemKind::Bhajiya),
                ),
                item(
                    2,
                    "Marcha Bhajiya",
                    &["green chilli", "besan", "oil"],
                    80.0,
                    Some(ItemKind::Bhajiya),
                ),
                item(
                    3,
                    "Kanda Bhajiya",
                    &["onion", "besan", "oil"],
                    120.0,
                    Some(ItemKind::Bhajiya),
                ),
                item(
                    6,
                    "Dahi Chaat",
                    &["curd", "chana", "chutney"],
                    150.0,
                    Some(ItemKind::Chaat),
                ),
                item(
                    7,
                    "Kolhapuri Chaat",
                    &["sev", "chana", "kolhapuri masala"],
                    120.0,
                    Some(ItemKind::Chaat),
                ),
                item(
                    8,
                    "Pani Puri",
                    &["puri", "pani", "chutney"],
                    200.0,
                    Some(ItemKind::Chaat),
                ),
                item(
                    9,
                    "Bhel Puri",
                    &["sev", "mamra", "chutney"],
                    100.0,
                    Some(ItemKind::Chaat),
                ),
            ],
            created_at: now,
            updated_at: now,
        },
        Category {
            category_id: 3,
            name: "Bhajiya Without Chaat".to_string(),
            description: "Extended bhajiya varieties, no chaat".to_string(),
            items: vec![
                item(1, "Methi Bhajiya", &["methi", "besan", "oil"], 100.0, None),
                item(2, "Marcha Bhajiya", &["green chilli", "besan", "oil"], 80.0, None),
                item(3, "Kanda Bhajiya", &["onion", "besan", "oil"], 120.0, None),
                item(4, "Batata Bhajiya", &["potato", "besan", "oil"], 150.0, None),
                item(5, "Palak Bhajiya", &["spinach", "besan", "oil"], 90.0, None),
                item(10, "Ringan Bhajiya", &["brinjal", "besan", "oil"], 110.0, None),
                item(11, "Karela Bhajiya", &["karela", "besan", "oil"], 95.0, None),
            ],
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn default_manufacturing_items() -> Vec<ManufacturingItem> {
    let now = Utc::now();
    let entries: [(i64, &str, i64); 8] = [
        (1, "Stove", 50), // 1 chulo per 50 people
        (2, "Gas Cylinder", 100),
        (3, "Plate", 1),
        (4, "Glass", 1),
        (5, "Spoon", 1),
        (6, "Kadai", 25), // 1 kadai per 25 people
        (7, "Table", 8),
        (8, "Chair", 1),
    ];

    entries
        .iter()
        .map(|(item_id, name, people_per_batch)| ManufacturingItem {
            item_id: *item_id,
            name: name.to_string(),
            units_per_batch: 1.0,
            people_per_batch: *people_per_batch,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

pub async fn seed_categories() -> Result<()> {
    let db = get_db();
    for category in default_categories() {
        let _: Option<Category> = db
            .create(("categories", category.category_id))
            .content(category)
            .await?;
    }
    Ok(())
}

pub async fn seed_manufacturing_items() -> Result<()> {
    let db = get_db();
    for manufacturing_item in default_manufacturing_items() {
        let _: Option<ManufacturingItem> = db
            .create(("manufacturing_items", manufacturing_item.item_id))
            .content(manufacturing_item)
            .await?;
    }
    Ok(())
}
