use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_helpers::{
    errors::handlers::method_not_allowed,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    PrettyJson, ValidatedJson,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ProductResult;
use crate::extractors::ProductIdPath;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI tag for product endpoints
pub const TAG: &str = "Products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product<i32>, ProductInput, DeleteResult),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Product CRUD endpoints")
    )
)]
pub struct ApiDoc;

/// Body returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResult {
    #[schema(example = "success")]
    pub result: &'static str,
}

/// Create the product router with all HTTP endpoints
///
/// Mounted under `/api` by the app:
/// `GET /products`, `POST /product/`, `GET|PUT|DELETE /product/{id}`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/product/", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

/// Get all products
///
/// Returns the first page (10 records, ordered by id) for PostgreSQL and the
/// whole collection for MongoDB.
#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    responses(
        (status = 200, description = "List of products", body = [Product<i32>]),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<PrettyJson<Vec<Product<R::Id>>>> {
    let products = service.list_products().await?;
    Ok(PrettyJson(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/product/",
    tag = TAG,
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product<i32>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, PrettyJson(product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ID: serial integer (PostgreSQL) or 24-character hex ObjectId (MongoDB)")
    ),
    responses(
        (status = 200, description = "Product found", body = Product<i32>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath<R::Id>,
) -> ProductResult<PrettyJson<Product<R::Id>>> {
    let product = service.get_product(id).await?;
    Ok(PrettyJson(product))
}

/// Update a product by id
///
/// The response is built from the path id and the request body; the record
/// is not read back. An unknown id answers 404 only when strict writes are
/// enabled.
#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product<i32>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath<R::Id>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<PrettyJson<Product<R::Id>>> {
    let product = service.update_product(id, input).await?;
    Ok(PrettyJson(product))
}

/// Delete a product by id
///
/// An unknown id answers 404 only when strict writes are enabled.
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResult),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath<R::Id>,
) -> ProductResult<PrettyJson<DeleteResult>> {
    service.delete_product(id).await?;
    Ok(PrettyJson(DeleteResult { result: "success" }))
}
