use pipedrive_api_client::{ApiResponse, Endpoint};
use tracing::instrument;

use crate::types::{
    FieldSearchHit, FieldSearchOptions, ItemSearchHit, ItemSearchOptions, Page, SearchItem,
    SearchResult, SearchResults, SearchResultsOptions,
};
use crate::Result;

use super::PipedriveRestClient;

/// Cross-resource search.
impl PipedriveRestClient {
    /// Search deals, persons, organizations and other items at once.
    ///
    /// Hits of item types without a model here come back as
    /// [`ItemSearchHit::Other`]. Related items are dropped; use
    /// [`item_search_full`](Self::item_search_full) to keep them.
    #[instrument(skip(self, options))]
    pub async fn item_search(
        &self,
        options: &ItemSearchOptions,
    ) -> Result<Page<SearchItem<ItemSearchHit>>> {
        let response = self.item_search_full(options).await?;
        let pagination = response.pagination().cloned();

        Ok(Page {
            items: response.data.items,
            pagination,
        })
    }

    /// [`item_search`](Self::item_search) with the whole response, including
    /// `related_items` and `additional_data`.
    pub async fn item_search_full(
        &self,
        options: &ItemSearchOptions,
    ) -> Result<ApiResponse<SearchResults<ItemSearchHit>>> {
        let endpoint = Endpoint::get("/itemSearch").query_struct(options)?;
        self.client.fetch(&endpoint).await
    }

    /// Search the values of one field.
    #[instrument(skip(self, options))]
    pub async fn item_search_field(
        &self,
        options: &FieldSearchOptions,
    ) -> Result<Vec<FieldSearchHit>> {
        let endpoint = Endpoint::get("/itemSearch/field").query_struct(options)?;
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }

    /// Legacy search across all item types.
    #[instrument(skip(self, options))]
    pub async fn search_results(
        &self,
        options: &SearchResultsOptions,
    ) -> Result<Vec<SearchResult>> {
        let endpoint = Endpoint::get("/searchResults").query_struct(options)?;
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }

    /// Legacy search over one field.
    #[instrument(skip(self, options))]
    pub async fn search_results_by_field(
        &self,
        options: &FieldSearchOptions,
    ) -> Result<Vec<SearchResult>> {
        let endpoint = Endpoint::get("/searchResults/field").query_struct(options)?;
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }
}
