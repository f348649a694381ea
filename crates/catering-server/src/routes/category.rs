use axum::{routing::get, Router};
use utoipa::OpenApi;

use crate::handlers::category::{
    create_category, delete_category, get_category, list_categories, update_category,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::category::list_categories,
        crate::handlers::category::create_category,
        crate::handlers::category::get_category,
        crate::handlers::category::update_category,
        crate::handlers::category::delete_category,
    ),
    tags(
        (name = "Category", description = "Menu category management APIs")
    ),
)]
pub struct CategoryApi;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{category_id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}
