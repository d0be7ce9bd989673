//! HTTP handlers for the catalog

use axum::{Router, extract::State, routing::get};
use axum_helpers::{ApiResponse, ErrorResponse, UuidPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::service::ProductService;

#[derive(OpenApi)]
#[openapi(
    paths(list_products, list_categories, get_product),
    components(schemas(Product, ErrorResponse)),
    tags(
        (name = "Products", description = "Catalog browsing")
    )
)]
pub struct ApiDoc;

/// Public catalog routes, to be nested under `/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// All products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<ApiResponse<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(ApiResponse::ok(products))
}

/// Distinct category names
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Sorted category names", body = ApiResponse<Vec<String>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<ApiResponse<Vec<String>>> {
    let categories = service.categories().await?;
    Ok(ApiResponse::ok(categories))
}

/// Single product
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.get_product(id).await?;
    Ok(ApiResponse::ok(product))
}
