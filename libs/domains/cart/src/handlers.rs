//! HTTP handlers for the cart

use axum::{
    Router,
    extract::State,
    middleware,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    ApiResponse, AuthUser, ErrorResponse, JwtAuth, UuidPath, ValidatedJson, jwt_auth_middleware,
};
use domain_products::ProductRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CartResult;
use crate::models::{AddToCartRequest, CartItem, CartLine, UpdateCartRequest};
use crate::repository::CartRepository;
use crate::service::CartService;

#[derive(OpenApi)]
#[openapi(
    paths(get_cart, add_to_cart, update_cart, remove_from_cart, clear_cart),
    components(schemas(CartItem, CartLine, AddToCartRequest, UpdateCartRequest, ErrorResponse)),
    tags(
        (name = "Cart", description = "Authenticated user's shopping cart")
    )
)]
pub struct ApiDoc;

type SharedService<C, P> = Arc<CartService<C, P>>;

/// Cart routes, to be nested under `/cart`.
///
/// Every route requires a bearer token.
pub fn router<C, P>(service: CartService<C, P>, auth: JwtAuth) -> Router
where
    C: CartRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_cart))
        .route("/add", post(add_to_cart))
        .route("/update", put(update_cart))
        .route("/remove/{product_id}", delete(remove_from_cart))
        .route("/clear", delete(clear_cart))
        .route_layer(middleware::from_fn_with_state(auth, jwt_auth_middleware))
        .with_state(shared_service)
}

/// Current cart with products resolved
#[utoipa::path(
    get,
    path = "",
    tag = "Cart",
    responses(
        (status = 200, description = "Cart contents", body = ApiResponse<Vec<CartItem>>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_cart<C: CartRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    user: AuthUser,
) -> CartResult<ApiResponse<Vec<CartItem>>> {
    let items = service.get_cart(user.user_id).await?;
    Ok(ApiResponse::ok(items))
}

/// Add a product, summing into an existing line
#[utoipa::path(
    post,
    path = "/add",
    tag = "Cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<Vec<CartItem>>),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product or user not found", body = ErrorResponse)
    )
)]
async fn add_to_cart<C: CartRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<AddToCartRequest>,
) -> CartResult<ApiResponse<Vec<CartItem>>> {
    let items = service
        .add_item(user.user_id, input.product_id, input.quantity)
        .await?;
    Ok(ApiResponse::with_message("Item added to cart successfully", items))
}

/// Set the quantity of an existing line
#[utoipa::path(
    put,
    path = "/update",
    tag = "Cart",
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Cart updated", body = ApiResponse<Vec<CartItem>>),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product, user or cart line not found", body = ErrorResponse)
    )
)]
async fn update_cart<C: CartRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<UpdateCartRequest>,
) -> CartResult<ApiResponse<Vec<CartItem>>> {
    let items = service
        .update_item(user.user_id, input.product_id, input.quantity)
        .await?;
    Ok(ApiResponse::with_message("Cart updated successfully", items))
}

/// Remove a product's line
#[utoipa::path(
    delete,
    path = "/remove/{product_id}",
    tag = "Cart",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<Vec<CartItem>>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn remove_from_cart<C: CartRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    user: AuthUser,
    UuidPath(product_id): UuidPath,
) -> CartResult<ApiResponse<Vec<CartItem>>> {
    let items = service.remove_item(user.user_id, product_id).await?;
    Ok(ApiResponse::with_message(
        "Item removed from cart successfully",
        items,
    ))
}

/// Empty the cart
#[utoipa::path(
    delete,
    path = "/clear",
    tag = "Cart",
    responses(
        (status = 200, description = "Cart cleared", body = ApiResponse<Vec<CartItem>>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn clear_cart<C: CartRepository, P: ProductRepository>(
    State(service): State<SharedService<C, P>>,
    user: AuthUser,
) -> CartResult<ApiResponse<Vec<CartItem>>> {
    let items = service.clear_cart(user.user_id).await?;
    Ok(ApiResponse::with_message("Cart cleared successfully", items))
}
