use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::handlers::order::{
    create_order, delete_order, get_order, list_orders, print_order, recalculate_order,
    update_order,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::order::list_orders,
        crate::handlers::order::create_order,
        crate::handlers::order::get_order,
        crate::handlers::order::update_order,
        crate::handlers::order::delete_order,
        crate::handlers::order::recalculate_order,
        crate::handlers::order::print_order,
    ),
    tags(
        (name = "Order", description = "Catering order APIs")
    ),
)]
pub struct OrderApi;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/{order_id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/{order_id}/recalculate", post(recalculate_order))
        .route("/{order_id}/print", get(print_order))
}
