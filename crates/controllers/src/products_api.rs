use anyhow::Result;
use shared::domain::{Product, ProductId};
use storage::Repository;
use tracing::{debug, info, warn};

use crate::results::{ApiResult, RouteValues, GET_PRODUCT_ACTION};

/// JSON front end over a product repository.
#[derive(Clone)]
pub struct ProductsApiController<R> {
    repository: R,
}

impl<R: Repository<Product>> ProductsApiController<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_products(&self) -> Result<ApiResult<Vec<Product>>> {
        let products = self.repository.get_all().await?;
        debug!(count = products.len(), "listed products");
        Ok(ApiResult::Ok(products))
    }

    pub async fn get_product(&self, id: ProductId) -> Result<ApiResult<Product>> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ApiResult::Ok(product)),
            None => {
                debug!(product_id = %id, "product not found");
                Ok(ApiResult::NotFound)
            }
        }
    }

    pub async fn put_product(&self, id: ProductId, product: &Product) -> Result<ApiResult<()>> {
        if id != product.id {
            warn!(route_id = %id, body_id = %product.id, "product id mismatch");
            return Ok(ApiResult::BadRequest);
        }

        self.repository.update(product).await?;
        info!(product_id = %id, "product updated");
        Ok(ApiResult::NoContent)
    }

    pub async fn post_product(&self, product: Product) -> Result<ApiResult<Product>> {
        self.repository.create(&product).await?;
        info!(product_id = %product.id, "product created");
        Ok(ApiResult::CreatedAtAction {
            action_name: GET_PRODUCT_ACTION,
            route_values: RouteValues::new().with("id", product.id),
            value: product,
        })
    }
}

#[cfg(test)]
#[path = "tests/products_api_tests.rs"]
mod tests;
