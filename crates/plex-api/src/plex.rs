use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, info};
use url::Url;

use crate::client::{ApiError, HttpClient};
use crate::dual::{self, DualSchemaResult};
use crate::endpoints::{self, Endpoint, Target};
use crate::headers;
use crate::identity::ClientIdentity;
use crate::library::PlexLibraryClient;
use crate::models::{
    AddUserError, MediaContainerResponse, OAuthPin, PlexAccount, PlexAdd, PlexAuthentication,
    PlexFriends, PlexServers, PlexStatus, ResourceContainer, SharedServerRequest, SignInBody,
    UserRequest,
};
use crate::oauth;
use crate::request::ApiRequest;

pub const DEFAULT_PLEX_TV_URL: &str = "https://plex.tv/";

/// Client for the plex.tv account service and the read-only media server
/// endpoints.
///
/// Holds only the device identity and a pooled HTTP client; auth tokens and
/// server hosts are passed per call.
#[derive(Debug, Clone)]
pub struct PlexClient {
    http: HttpClient,
    identity: Arc<ClientIdentity>,
    plex_tv_url: String,
    app_url: String,
}

impl PlexClient {
    pub fn new(identity: ClientIdentity) -> Result<Self, ApiError> {
        Ok(Self::with_http(HttpClient::new()?, identity))
    }

    pub fn with_http(http: HttpClient, identity: ClientIdentity) -> Self {
        Self {
            http,
            identity: Arc::new(identity),
            plex_tv_url: DEFAULT_PLEX_TV_URL.to_string(),
            app_url: oauth::DEFAULT_APP_URL.to_string(),
        }
    }

    /// Point cloud calls at another plex.tv base (mock servers, proxies).
    pub fn with_plex_tv_url(mut self, url: impl Into<String>) -> Self {
        self.plex_tv_url = url.into();
        self
    }

    /// Base of the web app used for device-link URLs.
    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = url.into();
        self
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    /// Library management client sharing this client's transport and identity.
    pub fn library(&self) -> PlexLibraryClient {
        PlexLibraryClient::from_parts(self.http.clone(), Arc::clone(&self.identity))
    }

    fn prepare(
        &self,
        endpoint: &Endpoint,
        server: &str,
        params: &[(&str, &str)],
        token: Option<&str>,
    ) -> ApiRequest {
        let host = match endpoint.target {
            Target::Cloud => self.plex_tv_url.as_str(),
            Target::Server => server,
        };
        endpoint.prepare(host, params, &self.identity, token)
    }

    // --- plex.tv ---

    /// POST `users/sign_in.json` with the user's credentials.
    ///
    /// Plex "managed" home users cannot sign in this way.
    pub async fn sign_in(&self, user: &UserRequest) -> Result<PlexAuthentication, ApiError> {
        let mut request = self.prepare(&endpoints::SIGN_IN, "", &[], None);
        request.add_body(&SignInBody { user })?;
        let auth: PlexAuthentication = self.http.execute(request).await?;
        info!(user_id = auth.user.id, "signed in to plex.tv");
        Ok(auth)
    }

    /// GET `users/account.json`
    pub async fn get_account(&self, token: &str) -> Result<PlexAccount, ApiError> {
        let request = self.prepare(&endpoints::ACCOUNT, "", &[], Some(token));
        self.http.execute(request).await
    }

    /// GET `pms/friends/all`: every user the account shares with.
    pub async fn get_users(&self, token: &str) -> Result<PlexFriends, ApiError> {
        let request = self.prepare(&endpoints::FRIENDS, "", &[], Some(token));
        self.http.execute(request).await
    }

    /// GET `pms/servers.xml`: servers tied to the account.
    pub async fn get_servers(&self, token: &str) -> Result<PlexServers, ApiError> {
        let request = self.prepare(&endpoints::SERVERS, "", &[], Some(token));
        self.http.execute(request).await
    }

    /// GET `api/resources`: every device registered to the account.
    pub async fn get_resources(&self, token: &str) -> Result<ResourceContainer, ApiError> {
        let request = self.prepare(&endpoints::RESOURCES, "", &[], Some(token));
        self.http.execute(request).await
    }

    /// POST `api/v2/pins`: start a device-link flow. No token required.
    pub async fn create_pin(&self) -> Result<OAuthPin, ApiError> {
        let request = self.prepare(&endpoints::CREATE_PIN, "", &[], None);
        self.http.execute(request).await
    }

    /// GET `api/v2/pins/{id}`: poll a device-link PIN for its token.
    pub async fn get_pin(&self, pin_id: i64) -> Result<OAuthPin, ApiError> {
        let id = pin_id.to_string();
        let request = self.prepare(&endpoints::PIN, "", &[("id", id.as_str())], None);
        self.http.execute(request).await
    }

    /// URL the user opens to approve PIN `code`. Nothing is sent.
    pub fn get_oauth_url(&self, code: &str) -> Result<Url, ApiError> {
        oauth::build_linking_url(&self.app_url, &self.identity, code)
    }

    /// Share libraries of `server_id` with `email`.
    ///
    /// plex.tv answers with either the new share or a bare `<Response>`
    /// error element; both come back as a [`DualSchemaResult`].
    pub async fn add_user(
        &self,
        email: &str,
        server_id: &str,
        token: &str,
        libraries: &[i64],
    ) -> Result<DualSchemaResult<PlexAdd, AddUserError>, ApiError> {
        let mut request = self.prepare(
            &endpoints::SHARED_SERVERS,
            "",
            &[("server_id", server_id)],
            Some(token),
        );
        request.add_body(&SharedServerRequest::new(server_id, email, libraries))?;

        let format = request.content_type();
        let content = self.http.execute_raw(request).await?;
        let result: DualSchemaResult<PlexAdd, AddUserError> = dual::resolve(format, &content)?;
        if let DualSchemaResult::Error(ref err) = result {
            debug!(%server_id, code = err.code, status = %err.status, "plex.tv refused share");
        }
        Ok(result)
    }

    // --- media server ---

    /// GET the media server root at the absolute `uri`.
    pub async fn get_status(&self, token: &str, uri: &str) -> Result<PlexStatus, ApiError> {
        let mut request = ApiRequest::json(uri, "", Method::GET);
        headers::apply_identity(&mut request, &self.identity, Some(token));
        self.http.execute(request).await
    }

    /// GET `status/sessions`: active playback sessions.
    pub async fn get_sessions(
        &self,
        token: &str,
        host: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(&endpoints::SESSIONS, host, &[], Some(token));
        self.http.execute(request).await
    }

    /// GET `library/sections`
    pub async fn get_library_sections(
        &self,
        token: &str,
        host: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(&endpoints::LIBRARY_SECTIONS, host, &[], Some(token));
        self.http.execute(request).await
    }

    /// GET `library/sections/{key}/all`
    pub async fn get_library(
        &self,
        token: &str,
        host: &str,
        library_key: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let request = self.prepare(
            &endpoints::LIBRARY_ALL,
            host,
            &[("key", library_key)],
            Some(token),
        );
        self.http.execute(request).await
    }

    /// GET `library/metadata/{id}`
    pub async fn get_metadata(
        &self,
        token: &str,
        host: &str,
        item_id: i64,
    ) -> Result<MediaContainerResponse, ApiError> {
        let id = item_id.to_string();
        let request = self.prepare(&endpoints::METADATA, host, &[("id", id.as_str())], Some(token));
        self.http.execute(request).await
    }

    /// GET `library/metadata/{id}/children`: seasons of a show.
    pub async fn get_seasons(
        &self,
        token: &str,
        host: &str,
        rating_key: i64,
    ) -> Result<MediaContainerResponse, ApiError> {
        let id = rating_key.to_string();
        let request = self.prepare(
            &endpoints::METADATA_CHILDREN,
            host,
            &[("id", id.as_str())],
            Some(token),
        );
        self.http.execute(request).await
    }

    /// GET `library/sections/{key}/all?type=4`: one window of every episode.
    pub async fn get_all_episodes(
        &self,
        token: &str,
        host: &str,
        section: &str,
        start: i64,
        count: i64,
    ) -> Result<MediaContainerResponse, ApiError> {
        let mut request = self.prepare(
            &endpoints::LIBRARY_ALL,
            host,
            &[("key", section)],
            Some(token),
        );
        request.add_query_string("type", "4");
        headers::apply_container_window(&mut request, start, count);
        self.http.execute(request).await
    }

    /// GET `library/sections/{key}/recentlyAdded`: the newest 50 items.
    pub async fn get_recently_added(
        &self,
        token: &str,
        host: &str,
        section_id: &str,
    ) -> Result<MediaContainerResponse, ApiError> {
        let mut request = self.prepare(
            &endpoints::RECENTLY_ADDED,
            host,
            &[("key", section_id)],
            Some(token),
        );
        headers::apply_container_window(&mut request, 0, 50);
        self.http.execute(request).await
    }
}
