pub mod category;
pub mod manufacturing_item;
pub mod order;
