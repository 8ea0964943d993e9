//! Fan-out/fan-in catalog aggregation.

use futures_util::future::try_join_all;
use pokedex_core::ViewRecord;

use crate::fetch::CatalogApi;
use crate::project;
use crate::types::CatalogError;

/// Fetches one page of summaries, then every item's detail concurrently,
/// and merges them into view records in list order.
///
/// The join preserves initiation order, so the output order is independent
/// of which detail request resolves first. The aggregation is all-or-nothing:
/// a list failure issues no detail requests, and the first failing detail
/// fetch fails the whole call. Nothing is cached; every call re-fetches.
pub async fn load_catalog(
    api: &dyn CatalogApi,
    page_size: usize,
) -> Result<Vec<ViewRecord>, CatalogError> {
    let page = api.list_page(page_size).await.map_err(CatalogError::List)?;

    // No concurrency cap: the page is small and fixed.
    let fetches = page
        .results
        .iter()
        .take(page_size)
        .map(|summary| async move {
            let detail = api
                .detail_by_url(&summary.url)
                .await
                .map_err(|source| CatalogError::Detail {
                    name: summary.name.clone(),
                    source,
                })?;
            Ok(project::to_view_record(summary.name.clone(), &detail))
        });

    try_join_all(fetches).await
}
