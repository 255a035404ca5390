//! Product catalog manager.

use std::sync::Arc;

use parking_lot::Mutex;

use samovar_core::ProductId;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::Product;

const PRODUCTS_PATH: &str = "/api/products";

/// Snapshot-owning manager for the product family.
///
/// The distinct category set is derived state, recomputed from the new
/// snapshot on every load.
#[derive(Clone)]
pub struct ProductCatalog {
    api: ApiClient,
    state: Arc<Mutex<CatalogState>>,
}

#[derive(Default)]
struct CatalogState {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl ProductCatalog {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(CatalogState::default())),
        }
    }

    /// Fetch all active products, replacing the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; the old snapshot stays in
    /// place on failure.
    pub async fn load(&self) -> Result<Vec<Product>, ApiError> {
        let products: Vec<Product> = self.api.get(PRODUCTS_PATH).await?;

        let mut categories: Vec<String> =
            products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();

        let mut state = self.state.lock();
        state.products.clone_from(&products);
        state.categories = categories;
        drop(state);

        Ok(products)
    }

    /// The current snapshot.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state.lock().products.clone()
    }

    /// Sorted distinct categories from the current snapshot.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.state.lock().categories.clone()
    }

    /// Products in one category; `None` or `"all"` returns everything.
    #[must_use]
    pub fn by_category(&self, category: Option<&str>) -> Vec<Product> {
        let state = self.state.lock();
        match category {
            None | Some("all") => state.products.clone(),
            Some(category) => state
                .products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
        }
    }

    /// Look up a product in the snapshot.
    #[must_use]
    pub fn by_id(&self, id: ProductId) -> Option<Product> {
        self.state.lock().products.iter().find(|p| p.id == id).cloned()
    }
}
