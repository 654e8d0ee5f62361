use anyhow::Result;
use shared::{
    domain::{Product, ProductId},
    validation::ModelState,
};
use storage::Repository;
use tracing::{debug, info};

use crate::results::{ViewResult, CREATE_ACTION, DETAILS_ACTION, EDIT_ACTION, INDEX_ACTION};

/// Server-rendered front end over a product repository.
///
/// Form actions take the [`ModelState`] computed by the caller and never
/// validate on their own.
#[derive(Clone)]
pub struct ProductsController<R> {
    repository: R,
}

impl<R: Repository<Product>> ProductsController<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn index(&self) -> Result<ViewResult<Vec<Product>>> {
        let products = self.repository.get_all().await?;
        Ok(ViewResult::View {
            view_name: INDEX_ACTION,
            model: products,
        })
    }

    pub async fn details(&self, id: Option<ProductId>) -> Result<ViewResult<Product>> {
        let Some(id) = id else {
            return Ok(redirect_to_index());
        };
        self.find(id, DETAILS_ACTION).await
    }

    pub fn create_form(&self) -> ViewResult<Product> {
        ViewResult::View {
            view_name: CREATE_ACTION,
            model: Product::default(),
        }
    }

    pub async fn create(
        &self,
        product: Product,
        model_state: &ModelState,
    ) -> Result<ViewResult<Product>> {
        if !model_state.is_valid() {
            debug!(errors = model_state.errors().len(), "redisplaying create form");
            return Ok(ViewResult::View {
                view_name: CREATE_ACTION,
                model: product,
            });
        }

        self.repository.create(&product).await?;
        info!(product_id = %product.id, "product created");
        Ok(redirect_to_index())
    }

    pub async fn edit(&self, id: Option<ProductId>) -> Result<ViewResult<Product>> {
        let Some(id) = id else {
            return Ok(ViewResult::NotFound);
        };
        self.find(id, EDIT_ACTION).await
    }

    pub async fn edit_post(
        &self,
        id: ProductId,
        product: Product,
        model_state: &ModelState,
    ) -> Result<ViewResult<Product>> {
        if id != product.id {
            return Ok(ViewResult::NotFound);
        }
        if !model_state.is_valid() {
            debug!(product_id = %id, errors = model_state.errors().len(), "redisplaying edit form");
            return Ok(ViewResult::View {
                view_name: EDIT_ACTION,
                model: product,
            });
        }

        self.repository.update(&product).await?;
        info!(product_id = %id, "product updated");
        Ok(redirect_to_index())
    }

    async fn find(&self, id: ProductId, view_name: &'static str) -> Result<ViewResult<Product>> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ViewResult::View {
                view_name,
                model: product,
            }),
            None => {
                debug!(product_id = %id, "product not found");
                Ok(ViewResult::NotFound)
            }
        }
    }
}

fn redirect_to_index<M>() -> ViewResult<M> {
    ViewResult::RedirectToAction {
        action_name: INDEX_ACTION,
    }
}

#[cfg(test)]
#[path = "tests/products_tests.rs"]
mod tests;
