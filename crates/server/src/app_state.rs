use controllers::{ProductsApiController, ProductsController};
use storage::Storage;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) storage: Storage,
    pub(crate) api: ProductsApiController<Storage>,
    pub(crate) views: ProductsController<Storage>,
}

impl AppState {
    pub(crate) fn new(storage: Storage) -> Self {
        Self {
            api: ProductsApiController::new(storage.clone()),
            views: ProductsController::new(storage.clone()),
            storage,
        }
    }
}
