//! The menu, as the new-order page sees it.

use samovar_client::ApiClient;
use samovar_client::resources::ProductCatalog;

use super::CommandResult;
use crate::render;

/// Load the catalog and render it, optionally narrowed to one category.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn list(api: &ApiClient, category: Option<&str>) -> CommandResult {
    let catalog = ProductCatalog::new(api.clone());
    {
        let _spinner = render::Spinner::show();
        catalog.load().await?;
    }

    render::products(&catalog.by_category(category));
    if category.is_none() {
        render::categories(&catalog.categories());
    }
    Ok(())
}
