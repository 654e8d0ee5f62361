use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use shared::{domain::ProductId, validation::ModelState};

use crate::{
    app_state::AppState,
    forms::ProductForm,
    responses::{internal, view_response, HandlerError},
};

pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Result<Response, HandlerError> {
    let result = state.views.index().await.map_err(internal)?;
    view_response(result, &ModelState::new())
}

pub(crate) async fn details(
    State(state): State<Arc<AppState>>,
    id: Option<Path<i64>>,
) -> Result<Response, HandlerError> {
    let id = id.map(|Path(id)| ProductId(id));
    let result = state.views.details(id).await.map_err(internal)?;
    view_response(result, &ModelState::new())
}

pub(crate) async fn create_form(
    State(state): State<Arc<AppState>>,
) -> Result<Response, HandlerError> {
    view_response(state.views.create_form(), &ModelState::new())
}

pub(crate) async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProductForm>,
) -> Result<Response, HandlerError> {
    let (product, model_state) = form.bind();
    let result = state
        .views
        .create(product, &model_state)
        .await
        .map_err(internal)?;
    view_response(result, &model_state)
}

pub(crate) async fn edit(
    State(state): State<Arc<AppState>>,
    id: Option<Path<i64>>,
) -> Result<Response, HandlerError> {
    let id = id.map(|Path(id)| ProductId(id));
    let result = state.views.edit(id).await.map_err(internal)?;
    view_response(result, &ModelState::new())
}

pub(crate) async fn edit_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<Response, HandlerError> {
    let (product, model_state) = form.bind();
    let result = state
        .views
        .edit_post(ProductId(id), product, &model_state)
        .await
        .map_err(internal)?;
    view_response(result, &model_state)
}
