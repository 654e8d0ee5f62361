//! Turns controller results into HTTP responses.

use anyhow::anyhow;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use controllers::{ApiResult, RouteValues, ViewResult, GET_PRODUCT_ACTION, INDEX_ACTION};
use serde::Serialize;
use shared::{
    error::{ApiError, ErrorCode},
    validation::{FieldError, ModelState},
};
use tracing::error;

pub(crate) type HandlerError = (StatusCode, Json<ApiError>);

pub(crate) fn internal(err: anyhow::Error) -> HandlerError {
    error!(error = %format!("{err:#}"), "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(ErrorCode::Internal, format!("{err:#}"))),
    )
}

pub(crate) fn api_response<T: Serialize>(result: ApiResult<T>) -> Result<Response, HandlerError> {
    let status = status(result.status_code())?;
    let response = match result {
        ApiResult::Ok(value) => (status, Json(value)).into_response(),
        ApiResult::CreatedAtAction {
            action_name,
            route_values,
            value,
        } => {
            let location = action_location(action_name, &route_values)?;
            (status, [(header::LOCATION, location)], Json(value)).into_response()
        }
        ApiResult::NotFound | ApiResult::BadRequest | ApiResult::NoContent => {
            status.into_response()
        }
    };
    Ok(response)
}

/// Body written for a rendered view. Template rendering happens client-side.
#[derive(Debug, Serialize)]
struct RenderedView<'a, M> {
    view: &'static str,
    model: M,
    errors: &'a [FieldError],
}

pub(crate) fn view_response<M: Serialize>(
    result: ViewResult<M>,
    model_state: &ModelState,
) -> Result<Response, HandlerError> {
    let status = status(result.status_code())?;
    let response = match result {
        ViewResult::View { view_name, model } => (
            status,
            Json(RenderedView {
                view: view_name,
                model,
                errors: model_state.errors(),
            }),
        )
            .into_response(),
        ViewResult::RedirectToAction { action_name } => {
            let location = action_location(action_name, &RouteValues::new())?;
            (status, [(header::LOCATION, location)]).into_response()
        }
        ViewResult::NotFound => status.into_response(),
    };
    Ok(response)
}

fn action_location(action_name: &str, route_values: &RouteValues) -> Result<String, HandlerError> {
    match action_name {
        INDEX_ACTION => Ok("/products".to_string()),
        GET_PRODUCT_ACTION => route_values
            .get("id")
            .map(|id| format!("/api/products/{id}"))
            .ok_or_else(|| internal(anyhow!("route value 'id' missing for {action_name}"))),
        other => Err(internal(anyhow!("no route registered for action {other}"))),
    }
}

fn status(code: u16) -> Result<StatusCode, HandlerError> {
    StatusCode::from_u16(code).map_err(|e| internal(e.into()))
}
