use axum::{routing::get, Router};
use utoipa::OpenApi;

use crate::handlers::manufacturing_item::{
    create_manufacturing_item, delete_manufacturing_item, get_manufacturing_item,
    list_manufacturing_items, update_manufacturing_item,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::manufacturing_item::list_manufacturing_items,
        crate::handlers::manufacturing_item::create_manufacturing_item,
        crate::handlers::manufacturing_item::get_manufacturing_item,
        crate::handlers::manufacturing_item::update_manufacturing_item,
        crate::handlers::manufacturing_item::delete_manufacturing_item,
    ),
    tags(
        (name = "ManufacturingItem", description = "Equipment ratio table APIs")
    ),
)]
pub struct ManufacturingItemApi;

pub fn create_router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_manufacturing_items).post(create_manufacturing_item),
        )
        .route(
            "/{item_id}",
            get(get_manufacturing_item)
                .put(update_manufacturing_item)
                .delete(delete_manufacturing_item),
        )
}
