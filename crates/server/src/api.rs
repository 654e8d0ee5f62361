use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use shared::domain::{Product, ProductId};

use crate::{
    app_state::AppState,
    responses::{api_response, internal, HandlerError},
};

pub(crate) async fn get_products(
    State(state): State<Arc<AppState>>,
) -> Result<Response, HandlerError> {
    let result = state.api.get_products().await.map_err(internal)?;
    api_response(result)
}

pub(crate) async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, HandlerError> {
    let result = state
        .api
        .get_product(ProductId(id))
        .await
        .map_err(internal)?;
    api_response(result)
}

pub(crate) async fn put_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(product): Json<Product>,
) -> Result<Response, HandlerError> {
    let result = state
        .api
        .put_product(ProductId(id), &product)
        .await
        .map_err(internal)?;
    api_response(result)
}

pub(crate) async fn post_product(
    State(state): State<Arc<AppState>>,
    Json(product): Json<Product>,
) -> Result<Response, HandlerError> {
    let result = state.api.post_product(product).await.map_err(internal)?;
    api_response(result)
}
