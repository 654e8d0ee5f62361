use std::collections::BTreeMap;

pub const INDEX_ACTION: &str = "Index";
pub const DETAILS_ACTION: &str = "Details";
pub const CREATE_ACTION: &str = "Create";
pub const EDIT_ACTION: &str = "Edit";
pub const GET_PRODUCT_ACTION: &str = "GetProduct";

/// Named values used to build the location of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteValues(BTreeMap<&'static str, String>);

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.insert(key, value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Outcome of a JSON API action.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Ok(T),
    NotFound,
    BadRequest,
    NoContent,
    CreatedAtAction {
        action_name: &'static str,
        route_values: RouteValues,
        value: T,
    },
}

impl<T> ApiResult<T> {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiResult::Ok(_) => 200,
            ApiResult::CreatedAtAction { .. } => 201,
            ApiResult::NoContent => 204,
            ApiResult::BadRequest => 400,
            ApiResult::NotFound => 404,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ApiResult::Ok(value) | ApiResult::CreatedAtAction { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Outcome of a view action: render a model, send the caller elsewhere, or 404.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewResult<M> {
    View { view_name: &'static str, model: M },
    RedirectToAction { action_name: &'static str },
    NotFound,
}

impl<M> ViewResult<M> {
    pub fn status_code(&self) -> u16 {
        match self {
            ViewResult::View { .. } => 200,
            ViewResult::RedirectToAction { .. } => 302,
            ViewResult::NotFound => 404,
        }
    }

    pub fn model(&self) -> Option<&M> {
        match self {
            ViewResult::View { model, .. } => Some(model),
            _ => None,
        }
    }
}
