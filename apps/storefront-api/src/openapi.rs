//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Catalog browsing and per-user shopping carts"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/cart", api = domain_cart::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Catalog endpoints"),
        (name = "Cart", description = "Cart endpoints, bearer token required")
    )
)]
pub struct ApiDoc;
