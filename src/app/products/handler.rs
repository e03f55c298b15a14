//! 产品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        OriginalUri, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use super::model::{Product, ProductInput};
use crate::{app::AppState, core::error::CoreError};

/// 产品路由，挂载在配置的路由前缀之下
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn product_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, CoreError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| CoreError::BadRequest(rejection.body_text()))
}

fn product_input(
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<ProductInput, CoreError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| CoreError::BadRequest(rejection.body_text()))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    Ok(Json(state.product_service.list()?))
}

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = product_id(path)?;
    Ok(Json(state.product_service.get(id)?))
}

pub async fn create_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, CoreError> {
    let product = state.product_service.create(product_input(body)?)?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    )
        .into_response())
}

pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let id = product_id(path)?;
    state.product_service.update(id, product_input(body)?)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let id = product_id(path)?;
    state.product_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
