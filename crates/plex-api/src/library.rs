use std::sync::Arc;

use tracing::{debug, info};

use crate::client::{ApiError, HttpClient};
use crate::endpoints::{self, Endpoint};
use crate::headers;
use crate::identity::ClientIdentity;
use crate::models::{CollectionModel, LibrarySearch, MediaContainerResponse, SearchType};
use crate::request::ApiRequest;

/// Client for library management on a Plex Media Server: search, scans,
/// trash and collections.
///
/// Obtain one from [`PlexClient::library`](crate::PlexClient::library) or
/// build it directly with [`PlexLibraryClient::new`].
#[derive(Debug, Clone)]
pub struct PlexLibraryClient {
    http: HttpClient,
    identity: Arc<ClientIdentity>,
}

impl PlexLibraryClient {
    pub fn new(identity: ClientIdentity) -> Result<Self, ApiError> {
        Ok(Self::from_parts(HttpClient::new()?, Arc::new(identity)))
    }

    pub(crate) fn from_parts(http: HttpClient, identity: Arc<ClientIdentity>) -> Self {
        Self { http, identity }
    }

    fn prepare(
        &self,
        endpoint: &Endpoint,
        host: &str,
        params: &[(&str, &str)],
        token: &str,
    ) -> ApiRequest {
        endpoint.prepare(host, params, &self.identity, Some(token))
    }

    /// PUT `library/sections/{key}/emptyTrash`
    pub async fn empty_trash(&self, token: &str, host: &str, key: &str) -> Result<(), ApiError> {
        let request = self.prepare(&endpoints::EMPTY_TRASH, host, &[("key", key)], token);
        self.http.execute_empty(request).await
    }

    /// GET `library/sections/{key}/refresh`, optionally refreshing all metadata.
    pub async fn scan_for_new_items(
        &self,
        token: &str,
        host: &str,
        key: &str,
        force_metadata_refresh: bool,
    ) -> Result<(), ApiError> {
        let mut request = self.prepare(&endpoints::SCAN, host, &[("key", key)], token);
        if force_metadata_refresh {
            request.add_query_string("force", "1");
        }
        info!(%key, force = force_metadata_refresh, "starting library scan");
        self.http.execute_empty(request).await
    }

    /// DELETE `library/sections/{key}/refresh`
    pub async fn cancel_scan_for_new_items(
        &self,
        token: &str,
        host: &str,
        key: &str,
    ) -> Result<(), ApiError> {
        let request = self.prepare(&endpoints::CANCEL_SCAN, host, &[("key", key)], token);
        self.http.execute_empty(request).await
    }

    /// Field types and their operators, from the section's `Meta` block.
    pub async fn get_filter_fields(
        &self,
        token: &str,
        host: &str,
        key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let mut request = self.prepare(&endpoints::LIBRARY_ALL, host, &[("key", key)], token);
        request.add_query_string("includeMeta", "1");
        headers::apply_container_window(&mut request, 0, 0);
        self.http.execute(request).await
    }

    /// GET `hubs/search?query=...` across every library.
    pub async fn hub_library_search(
        &self,
        token: &str,
        host: &str,
        title: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let mut request = self.prepare(&endpoints::HUB_SEARCH, host, &[], token);
        request.add_query_string("query", title);
        self.http.execute(request).await
    }

    /// Search one library section with filters, sort and a result window.
    pub async fn library_search(
        &self,
        token: &str,
        host: &str,
        search: &LibrarySearch,
    ) -> Result<MediaContainerResponse, ApiError> {
        let mut request = self.prepare(
            &endpoints::LIBRARY_ALL,
            host,
            &[("key", search.library_key.as_str())],
            token,
        );
        request.add_query_string("type", search.search_type.type_id().to_string());
        if let Some(title) = search.title.as_deref().filter(|t| !t.is_empty()) {
            request.add_query_string("title", title);
        }
        if let Some(sort) = search.sort.as_deref().filter(|s| !s.is_empty()) {
            request.add_query_string("sort", sort);
        }
        for filter in &search.filters {
            let (key, value) = filter.query_pair();
            request.add_query_string(key, value);
        }
        headers::apply_container_window(&mut request, search.start, search.count);
        self.http.execute(request).await
    }

    /// GET an item by its full key, e.g. `/library/metadata/123`.
    pub async fn get_item(
        &self,
        token: &str,
        host: &str,
        key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(&endpoints::ITEM, host, &[("key", key)], token);
        self.http.execute(request).await
    }

    /// Number of items in a section, fetched with an empty window.
    pub async fn get_library_size(
        &self,
        token: &str,
        host: &str,
        key: &str,
    ) -> Result<i64, ApiError> {
        let mut request = self.prepare(&endpoints::LIBRARY_ALL, host, &[("key", key)], token);
        headers::apply_container_window(&mut request, 0, 0);
        let resp: MediaContainerResponse = self.http.execute(request).await?;
        let container = resp.media_container;
        Ok(container.total_size.unwrap_or(container.size))
    }

    /// GET `library/sections/{key}/folder`
    pub async fn get_library_folders(
        &self,
        token: &str,
        host: &str,
        key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(&endpoints::LIBRARY_FOLDERS, host, &[("key", key)], token);
        self.http.execute(request).await
    }

    /// GET `library/sections/{key}/{filter}`: the values of one filter field
    /// (`genre`, `collection`, `year`, ...).
    pub async fn get_library_filter_values(
        &self,
        token: &str,
        host: &str,
        key: &str,
        filter: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let filter = filter.trim_start_matches('/');
        let request = self.prepare(
            &endpoints::LIBRARY_FILTER_VALUES,
            host,
            &[("key", key), ("filter", filter)],
            token,
        );
        self.http.execute(request).await
    }

    /// GET `library/sections/{key}/filters`
    pub async fn get_library_filters(
        &self,
        token: &str,
        host: &str,
        key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(&endpoints::LIBRARY_FILTERS, host, &[("key", key)], token);
        self.http.execute(request).await
    }

    /// GET `library/sections/{key}/collections`, optionally matching a title.
    pub async fn get_collections(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
        title: Option<&str>,
    ) -> Result<MediaContainerResponse, ApiError> {
        let mut request = self.prepare(
            &endpoints::COLLECTIONS,
            host,
            &[("key", library_key)],
            token,
        );
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            request.add_query_string("title", title);
        }
        self.http.execute(request).await
    }

    /// GET `library/collections/{key}`
    pub async fn get_collection(
        &self,
        token: &str,
        host: &str,
        collection_key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(&endpoints::COLLECTION, host, &[("key", collection_key)], token);
        self.http.execute(request).await
    }

    /// Tag item `rating_key` with collection `collection_name`.
    pub async fn add_collection_to_item(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
        rating_key: &str,
        collection_name: &str,
    ) -> Result<(), ApiError> {
        let mut request = self.edit_request(token, host, library_key, SearchType::Movie, rating_key);
        request.add_query_string("collection[0].tag.tag", collection_name);
        request.add_query_string("collection.locked", "1");
        self.http.execute_empty(request).await
    }

    /// Remove collection `collection_name` from item `rating_key`.
    pub async fn delete_collection_from_item(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
        rating_key: &str,
        collection_name: &str,
    ) -> Result<(), ApiError> {
        let mut request = self.edit_request(token, host, library_key, SearchType::Movie, rating_key);
        request.add_query_string("collection[].tag.tag-", collection_name);
        self.http.execute_empty(request).await
    }

    /// Apply every `Some` field of `collection` to the collection item.
    pub async fn update_collection(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
        collection: &CollectionModel,
    ) -> Result<(), ApiError> {
        let mut request = self.edit_request(
            token,
            host,
            library_key,
            SearchType::Collection,
            &collection.rating_key,
        );
        let fields = [
            ("title.value", &collection.title),
            ("titleSort.value", &collection.title_sort),
            ("summary.value", &collection.summary),
            ("contentRating.value", &collection.content_rating),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                request.add_query_string(key, value.as_str());
            }
        }
        self.http.execute_empty(request).await
    }

    /// GET `library/collections/{key}/children`: the items in a collection.
    pub async fn get_collection_items(
        &self,
        token: &str,
        host: &str,
        collection_key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(
            &endpoints::COLLECTION_CHILDREN,
            host,
            &[("key", collection_key)],
            token,
        );
        self.http.execute(request).await
    }

    /// Items of the collection titled `collection_name` in `library_key`.
    ///
    /// Returns an empty container when no collection has that title.
    pub async fn get_collection_items_by_name(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
        collection_name: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let collections = self
            .get_collections(token, host, library_key, Some(collection_name))
            .await?;
        let found = collections
            .media_container
            .metadata
            .into_iter()
            .find(|c| c.title.eq_ignore_ascii_case(collection_name));

        match found {
            Some(collection) => {
                self.get_collection_items(token, host, &collection.rating_key)
                    .await
            }
            None => {
                debug!(%library_key, %collection_name, "no collection with that title");
                Ok(MediaContainerResponse::default())
            }
        }
    }

    /// GET `library/collections/{key}`: metadata of the collection itself.
    pub async fn get_collection_item_metadata(
        &self,
        token: &str,
        host: &str,
        collection_key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        self.get_collection(token, host, collection_key).await
    }

    fn edit_request(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
        kind: SearchType,
        rating_key: &str,
    ) -> ApiRequest {
        let mut request = self.prepare(
            &endpoints::EDIT_LIBRARY_ITEMS,
            host,
            &[("key", library_key)],
            token,
        );
        request.add_query_string("type", kind.type_id().to_string());
        request.add_query_string("id", rating_key);
        request
    }
}
