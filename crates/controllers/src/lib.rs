//! Request-handling decisions for the product catalogue.
//!
//! Both controllers take an injected [`storage::Repository`] and turn its
//! outcomes into result values; the HTTP host decides how those are written
//! to the wire.

pub mod products;
pub mod products_api;
pub mod results;

pub use products::ProductsController;
pub use products_api::ProductsApiController;
pub use results::{ApiResult, RouteValues, ViewResult, GET_PRODUCT_ACTION, INDEX_ACTION};

#[cfg(test)]
#[path = "tests/mock_repository.rs"]
mod mock_repository;
