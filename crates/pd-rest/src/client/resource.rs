use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::bulk::{BulkDeleteData, BulkDeletePolicy, BulkDeleteResult};
use crate::endpoint::{join_ids, Operation, Resource, Searchable};
use crate::types::{ListOptions, Page, SearchItem, SearchOptions, SearchResults};
use crate::Result;

impl<R: Resource> super::ResourceClient<'_, R> {
    /// Create an entity. The body is usually `R::Entity` but any serializable
    /// payload is accepted.
    #[instrument(skip(self, body), fields(resource = R::PATH))]
    pub async fn create<B>(&self, body: &B) -> Result<R::Entity>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = Operation::Create.endpoint::<R>();
        Ok(self.client.call(&endpoint, Some(body)).await?.into_data())
    }

    /// Get an entity by id.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn get(&self, id: u64) -> Result<R::Entity> {
        let endpoint = Operation::Get(id).endpoint::<R>();
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }

    /// Update an entity. Only the fields present in `changes` are sent.
    #[instrument(skip(self, changes), fields(resource = R::PATH))]
    pub async fn update<B>(&self, id: u64, changes: &B) -> Result<R::Entity>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = Operation::Update(id).endpoint::<R>();
        Ok(self.client.call(&endpoint, Some(changes)).await?.into_data())
    }

    /// Delete an entity by id.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn delete(&self, id: u64) -> Result<()> {
        let endpoint = Operation::Delete(id).endpoint::<R>();
        self.client.fetch::<Value>(&endpoint).await?;
        Ok(())
    }

    /// Delete several entities in one call, using the resource's default
    /// [`BulkDeletePolicy`].
    pub async fn delete_many(&self, ids: &[u64]) -> Result<BulkDeleteResult> {
        self.delete_many_with(ids, R::BULK_DELETE_POLICY).await
    }

    /// Delete several entities in one call.
    ///
    /// Ids are sent as one comma-separated `ids` value. Under
    /// [`BulkDeletePolicy::Lenient`] a remote rejection is returned inside the
    /// result instead of as `Err`.
    #[instrument(skip(self, ids), fields(resource = R::PATH, count = ids.len()))]
    pub async fn delete_many_with(
        &self,
        ids: &[u64],
        policy: BulkDeletePolicy,
    ) -> Result<BulkDeleteResult> {
        let endpoint = Operation::DeleteMany
            .endpoint::<R>()
            .query("ids", join_ids(ids));

        match self.client.fetch::<BulkDeleteData>(&endpoint).await {
            Ok(response) => Ok(BulkDeleteResult {
                requested: ids.to_vec(),
                deleted: response.data.id,
                remote_error: None,
            }),
            Err(err) if policy == BulkDeletePolicy::Lenient && err.is_api_error() => {
                debug!(error = %err, "Bulk delete rejected");
                Ok(BulkDeleteResult {
                    requested: ids.to_vec(),
                    deleted: Vec::new(),
                    remote_error: Some(err),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch one page.
    #[instrument(skip(self, options), fields(resource = R::PATH))]
    pub async fn list(&self, options: &ListOptions) -> Result<Page<R::Entity>> {
        let endpoint = Operation::List.endpoint::<R>().query_struct(options)?;
        let response = self.client.fetch::<Vec<R::Entity>>(&endpoint).await?;
        let pagination = response.pagination().cloned();

        Ok(Page {
            items: response.data,
            pagination,
        })
    }

    /// Fetch every page, starting at `options.start`.
    ///
    /// Pages are requested one after another until the server reports no more
    /// items, or until `next_start` stops moving forward.
    pub async fn list_all(&self, options: &ListOptions) -> Result<Vec<R::Entity>> {
        let mut options = options.clone();
        let mut items = Vec::new();

        loop {
            let page = self.list(&options).await?;
            let next = page.next_start();
            let fetched = page.items.len();
            items.extend(page.items);

            let current = options.start.unwrap_or(0);
            match next {
                Some(start) if fetched > 0 && start > current => options.start = Some(start),
                Some(start) if fetched > 0 => {
                    warn!(current, next_start = start, "Pagination did not advance, stopping");
                    break;
                }
                _ => break,
            }
        }

        Ok(items)
    }
}

impl<R: Searchable> super::ResourceClient<'_, R> {
    /// Search this resource at `/{resource}/search`.
    #[instrument(skip(self, options), fields(resource = R::PATH))]
    pub async fn search(&self, options: &SearchOptions) -> Result<Page<SearchItem<R::Item>>> {
        let endpoint = Operation::Search.endpoint::<R>().query_struct(options)?;
        let response = self
            .client
            .fetch::<SearchResults<R::Item>>(&endpoint)
            .await?;
        let pagination = response.pagination().cloned();

        Ok(Page {
            items: response.data.items,
            pagination,
        })
    }
}
