//! Router tests for the document-store identifier
//!
//! The router is instantiated with an in-memory repository keyed by
//! `DocumentId`, so the hex id handling runs through the full HTTP stack
//! without a MongoDB server.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Mutex;
use tower::ServiceExt;

#[derive(Default)]
struct InMemoryRepository {
    products: Mutex<Vec<Product<DocumentId>>>,
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    type Id = DocumentId;

    async fn get_product(&self, id: DocumentId) -> ProductResult<Product<DocumentId>> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProductError::NotFound)
    }

    async fn create_product(&self, input: ProductInput) -> ProductResult<Product<DocumentId>> {
        let product = input.into_product(DocumentId::new());
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: DocumentId, input: ProductInput) -> ProductResult<u64> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                *product = input.into_product(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_product(&self, id: DocumentId) -> ProductResult<u64> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok((before - products.len()) as u64)
    }

    async fn get_products(&self, _limit: u64, _offset: u64) -> ProductResult<Vec<Product<DocumentId>>> {
        Ok(self.products.lock().unwrap().clone())
    }
}

fn app() -> Router {
    let service = ProductService::new(InMemoryRepository::default());
    Router::new().nest("/api", handlers::router(service))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn is_object_id_hex(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() == 24 && s.chars().all(|c| c.is_ascii_hexdigit()))
}

#[tokio::test]
async fn test_create_returns_hex_id_usable_in_path() {
    let app = app();

    let (status, created) = call(
        &app,
        "POST",
        "/api/product/",
        Some(json!({"name": "lamp", "price": 12.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(is_object_id_hex(&created["id"]), "id: {}", created["id"]);

    let uri = format!("/api/product/{}", created["id"].as_str().unwrap());
    let (status, fetched) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = call(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_update_and_delete_by_hex_id() {
    let app = app();
    let (_, created) = call(
        &app,
        "POST",
        "/api/product/",
        Some(json!({"name": "lamp", "price": 12.5})),
    )
    .await;
    let uri = format!("/api/product/{}", created["id"].as_str().unwrap());

    let (status, updated) = call(
        &app,
        "PUT",
        &uri,
        Some(json!({"id": "000000000000000000000000", "name": "desk lamp", "price": 15.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "desk lamp");

    let (status, body) = call(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "success"}));

    let (status, body) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_malformed_hex_id_returns_400() {
    let app = app();

    for uri in [
        "/api/product/1",
        "/api/product/65f1c0a2b3d4e5f60123456",
        "/api/product/zzzzzzzzzzzzzzzzzzzzzzzz",
    ] {
        for method in ["GET", "DELETE"] {
            let (status, body) = call(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
            assert_eq!(body, json!({"error": "Invalid product ID"}));
        }
    }
}
