use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use service::product::ProductDto;
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

pub const BASE_PATH: &str = "/api/product";

pub fn location_of(id: i32) -> String {
    format!("{}/{}", BASE_PATH, id)
}

#[utoipa::path(
    get, path = "/api/product", tag = "product",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.products.get_all_products().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

#[utoipa::path(
    get, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.products.get_product_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/product", tag = "product",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductDto>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.products.add_product(input).await?;
    let location = location_of(created.id);
    info!(id = created.id, %location, "created product");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<ProductDto>,
) -> Result<StatusCode, ApiError> {
    state.products.update_product(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.products.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
