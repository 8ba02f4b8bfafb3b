//! HTTP handlers for Products API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    IntPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, DeleteResponse, Product, ProductListResponse, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        update_availability,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct,
            ProductResponse, ProductListResponse, DeleteResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(update_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let products = service.list_products().await?;
    Ok(Json(ProductListResponse { data: products }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse { data: product })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IntPath(id): IntPath,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(id).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IntPath(id): IntPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// Toggle product availability. Any request body is ignored.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IntPath(id): IntPath,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_availability(id).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = DeleteResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IntPath(id): IntPath,
) -> ProductResult<Json<DeleteResponse>> {
    service.delete_product(id).await?;
    Ok(Json(DeleteResponse {
        data: "Product deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn monitor(id: i32) -> Product {
        Product {
            id,
            name: "Monitor".to_string(),
            price: 200.0,
            availability: true,
        }
    }

    fn app(repo: MockProductRepository) -> Router {
        router(ProductService::new(repo))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_product_returns_201_with_envelope() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().returning(|input| {
            Ok(Product {
                id: 1,
                name: input.name,
                price: input.price,
                availability: true,
            })
        });

        let response = app(repo)
            .oneshot(json_request(
                Method::POST,
                "/",
                json!({"name": "Monitor", "price": 200}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "Monitor");
        assert_eq!(body["data"]["price"], 200.0);
        assert_eq!(body["data"]["availability"], true);
    }

    #[tokio::test]
    async fn create_product_with_invalid_price_returns_400_errors() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let response = app(repo)
            .oneshot(json_request(
                Method::POST,
                "/",
                json!({"name": "Monitor", "price": 0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "price"));
    }

    #[tokio::test]
    async fn create_product_with_empty_name_returns_400_errors() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let response = app(repo)
            .oneshot(json_request(
                Method::POST,
                "/",
                json!({"name": "", "price": 200}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert!(errors
            .iter()
            .any(|e| e["field"] == "name" && e["message"] == "Product name cannot be empty"));
    }

    #[tokio::test]
    async fn create_product_with_non_numeric_price_returns_400() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let response = app(repo)
            .oneshot(json_request(
                Method::POST,
                "/",
                json!({"name": "Monitor", "price": "expensive"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn list_products_wraps_rows_in_data() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![monitor(1), monitor(2)]));

        let response = app(repo)
            .oneshot(empty_request(Method::GET, "/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["id"], 1);
    }

    #[tokio::test]
    async fn get_product_returns_404_envelope_for_missing_row() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let response = app(repo)
            .oneshot(empty_request(Method::GET, "/999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Product 999 not found");
    }

    #[tokio::test]
    async fn get_product_with_non_numeric_id_returns_400() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().times(0);

        let response = app(repo)
            .oneshot(empty_request(Method::GET, "/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors[0]["field"], "id");
        assert!(errors[0]["message"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn update_product_replaces_fields() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .with(eq(1), mockall::predicate::always())
            .returning(|id, input| {
                Ok(Some(Product {
                    id,
                    name: input.name,
                    price: input.price,
                    availability: input.availability,
                }))
            });

        let response = app(repo)
            .oneshot(json_request(
                Method::PUT,
                "/1",
                json!({"name": "Keyboard", "price": 59.5, "availability": false}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "Keyboard");
        assert_eq!(body["data"]["availability"], false);
    }

    #[tokio::test]
    async fn patch_toggles_availability_without_a_body() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(monitor(1))));
        repo.expect_set_availability()
            .with(eq(1), eq(false))
            .returning(|id, availability| {
                Ok(Some(Product {
                    availability,
                    ..monitor(id)
                }))
            });

        let response = app(repo)
            .oneshot(empty_request(Method::PATCH, "/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["availability"], false);
    }

    #[tokio::test]
    async fn delete_product_returns_confirmation_message() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(1)).returning(|_| Ok(true));

        let response = app(repo)
            .oneshot(empty_request(Method::DELETE, "/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"], "Product deleted");
    }

    #[tokio::test]
    async fn delete_missing_product_returns_404() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(999)).returning(|_| Ok(false));

        let response = app(repo)
            .oneshot(empty_request(Method::DELETE, "/999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Product 999 not found");
    }
}
