pub mod admin;
pub mod calculation;
pub mod category;
pub mod health;
pub mod manufacturing_item;
pub mod order;
