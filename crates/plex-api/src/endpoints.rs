//! Every remote operation as data: path template, verb, wire format and host.
//!
//! Client methods look up an [`Endpoint`], fill in its `{placeholders}` and
//! hand the resulting [`ApiRequest`] to the transport.

use reqwest::Method;

use crate::format::ContentType;
use crate::headers;
use crate::identity::ClientIdentity;
use crate::request::ApiRequest;

/// Which host an endpoint's path is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The plex.tv account service.
    Cloud,
    /// A caller-supplied Plex Media Server.
    Server,
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Logged with every dispatch as the `operation` field.
    pub name: &'static str,
    pub path: &'static str,
    pub method: Method,
    pub content_type: ContentType,
    pub target: Target,
    /// Substitute parameters unencoded; for templates whose value is a whole path.
    pub verbatim: bool,
}

impl Endpoint {
    const fn new(
        name: &'static str,
        path: &'static str,
        method: Method,
        content_type: ContentType,
        target: Target,
    ) -> Self {
        Self {
            name,
            path,
            method,
            content_type,
            target,
            verbatim: false,
        }
    }

    const fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    /// Substitute each `{key}` in the path template in a single pass.
    ///
    /// Values are percent-encoded as one path segment unless the endpoint is
    /// verbatim. Placeholders without a matching parameter are left as is.
    pub fn render(&self, params: &[(&str, &str)]) -> String {
        let mut rendered = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let Some(len) = rest[open..].find('}') else {
                break;
            };
            let close = open + len;
            let key = &rest[open + 1..close];
            rendered.push_str(&rest[..open]);
            match params.iter().find(|(name, _)| *name == key) {
                Some((_, value)) if self.verbatim => rendered.push_str(value),
                Some((_, value)) => rendered.push_str(&urlencoding::encode(value)),
                None => rendered.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        rendered.push_str(rest);
        rendered
    }

    /// Build the request for this endpoint against `host` without headers.
    pub fn request(&self, host: &str, params: &[(&str, &str)]) -> ApiRequest {
        ApiRequest::new(
            self.render(params),
            host,
            self.method.clone(),
            self.content_type,
        )
        .with_operation(self.name)
    }

    /// Build the request and stamp the identity and token headers.
    pub fn prepare(
        &self,
        host: &str,
        params: &[(&str, &str)],
        identity: &ClientIdentity,
        token: Option<&str>,
    ) -> ApiRequest {
        let mut request = self.request(host, params);
        headers::apply_identity(&mut request, identity, token);
        request
    }
}

use ContentType::{Json, Xml};
use Target::{Cloud, Server};

// --- plex.tv ---

pub const SIGN_IN: Endpoint = Endpoint::new("sign_in", "users/sign_in.json", Method::POST, Json, Cloud);
pub const ACCOUNT: Endpoint = Endpoint::new("account", "users/account.json", Method::GET, Json, Cloud);
pub const FRIENDS: Endpoint = Endpoint::new("friends", "pms/friends/all", Method::GET, Xml, Cloud);
pub const SERVERS: Endpoint = Endpoint::new("servers", "pms/servers.xml", Method::GET, Xml, Cloud);
pub const RESOURCES: Endpoint = Endpoint::new(
    "resources",
    "api/resources?includeHttps=1",
    Method::GET,
    Xml,
    Cloud,
);
pub const CREATE_PIN: Endpoint = Endpoint::new(
    "create_pin",
    "api/v2/pins?strong=true",
    Method::POST,
    Json,
    Cloud,
);
pub const PIN: Endpoint = Endpoint::new("pin", "api/v2/pins/{id}", Method::GET, Json, Cloud);
pub const SHARED_SERVERS: Endpoint = Endpoint::new(
    "shared_servers",
    "api/servers/{server_id}/shared_servers",
    Method::POST,
    Xml,
    Cloud,
);

// --- media server ---

pub const SESSIONS: Endpoint = Endpoint::new("sessions", "status/sessions", Method::GET, Json, Server);
pub const LIBRARY_SECTIONS: Endpoint = Endpoint::new(
    "library_sections",
    "library/sections",
    Method::GET,
    Json,
    Server,
);
pub const LIBRARY_ALL: Endpoint = Endpoint::new(
    "library_all",
    "library/sections/{key}/all",
    Method::GET,
    Json,
    Server,
);
pub const METADATA: Endpoint = Endpoint::new(
    "metadata",
    "library/metadata/{id}",
    Method::GET,
    Json,
    Server,
);
pub const METADATA_CHILDREN: Endpoint = Endpoint::new(
    "metadata_children",
    "library/metadata/{id}/children",
    Method::GET,
    Json,
    Server,
);
pub const RECENTLY_ADDED: Endpoint = Endpoint::new(
    "recently_added",
    "library/sections/{key}/recentlyAdded",
    Method::GET,
    Json,
    Server,
);
pub const ITEM: Endpoint = Endpoint::new("item", "{key}", Method::GET, Json, Server).verbatim();

// --- library management ---

pub const EMPTY_TRASH: Endpoint = Endpoint::new(
    "empty_trash",
    "library/sections/{key}/emptyTrash",
    Method::PUT,
    Json,
    Server,
);
pub const SCAN: Endpoint = Endpoint::new(
    "scan",
    "library/sections/{key}/refresh",
    Method::GET,
    Json,
    Server,
);
pub const CANCEL_SCAN: Endpoint = Endpoint::new(
    "cancel_scan",
    "library/sections/{key}/refresh",
    Method::DELETE,
    Json,
    Server,
);
pub const HUB_SEARCH: Endpoint = Endpoint::new("hub_search", "hubs/search", Method::GET, Json, Server);
pub const LIBRARY_FOLDERS: Endpoint = Endpoint::new(
    "library_folders",
    "library/sections/{key}/folder",
    Method::GET,
    Json,
    Server,
);
pub const LIBRARY_FILTER_VALUES: Endpoint = Endpoint::new(
    "library_filter_values",
    "library/sections/{key}/{filter}",
    Method::GET,
    Json,
    Server,
);
pub const LIBRARY_FILTERS: Endpoint = Endpoint::new(
    "library_filters",
    "library/sections/{key}/filters",
    Method::GET,
    Json,
    Server,
);
pub const COLLECTIONS: Endpoint = Endpoint::new(
    "collections",
    "library/sections/{key}/collections",
    Method::GET,
    Json,
    Server,
);
pub const COLLECTION: Endpoint = Endpoint::new(
    "collection",
    "library/collections/{key}",
    Method::GET,
    Json,
    Server,
);
pub const COLLECTION_CHILDREN: Endpoint = Endpoint::new(
    "collection_children",
    "library/collections/{key}/children",
    Method::GET,
    Json,
    Server,
);
pub const EDIT_LIBRARY_ITEMS: Endpoint = Endpoint::new(
    "edit_library_items",
    "library/sections/{key}/all",
    Method::PUT,
    Json,
    Server,
);
