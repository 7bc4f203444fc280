use serde::Deserialize;

use super::{empty_as_none, flag};

/// Response of `pms/servers.xml`: servers tied to the account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlexServers {
    #[serde(default, rename = "@friendlyName")]
    pub friendly_name: String,
    #[serde(default, rename = "@machineIdentifier")]
    pub machine_identifier: String,
    #[serde(default, rename = "Server")]
    pub servers: Vec<Server>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    #[serde(default, rename = "@accessToken")]
    pub access_token: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, rename = "@address")]
    pub address: String,
    #[serde(default, rename = "@port", deserialize_with = "empty_as_none")]
    pub port: Option<u16>,
    #[serde(default, rename = "@version")]
    pub version: String,
    #[serde(default, rename = "@scheme")]
    pub scheme: String,
    #[serde(default, rename = "@host")]
    pub host: String,
    #[serde(default, rename = "@localAddresses")]
    pub local_addresses: String,
    #[serde(rename = "@machineIdentifier")]
    pub machine_identifier: String,
    #[serde(default, rename = "@createdAt", deserialize_with = "empty_as_none")]
    pub created_at: Option<i64>,
    #[serde(default, rename = "@updatedAt", deserialize_with = "empty_as_none")]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "@owned", deserialize_with = "flag")]
    pub owned: bool,
    #[serde(default, rename = "@synced", deserialize_with = "flag")]
    pub synced: bool,
}

impl Server {
    /// `scheme://address:port` of the server's public endpoint.
    pub fn public_uri(&self) -> Option<String> {
        let port = self.port?;
        if self.address.is_empty() {
            return None;
        }
        let scheme = if self.scheme.is_empty() { "http" } else { &self.scheme };
        Some(format!("{scheme}://{}:{port}", self.address))
    }
}

/// Response of `api/resources`: every device registered to the account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceContainer {
    #[serde(default, rename = "Device")]
    pub devices: Vec<Resource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, rename = "@product")]
    pub product: String,
    #[serde(default, rename = "@productVersion")]
    pub product_version: String,
    #[serde(default, rename = "@platform")]
    pub platform: String,
    #[serde(default, rename = "@clientIdentifier")]
    pub client_identifier: String,
    #[serde(default, rename = "@provides")]
    pub provides: String,
    #[serde(default, rename = "@accessToken")]
    pub access_token: String,
    #[serde(default, rename = "@publicAddress")]
    pub public_address: String,
    #[serde(default, rename = "@owned", deserialize_with = "flag")]
    pub owned: bool,
    #[serde(default, rename = "@presence", deserialize_with = "flag")]
    pub presence: bool,
    #[serde(default, rename = "Connection")]
    pub connections: Vec<Connection>,
}

impl Resource {
    /// Whether the device is a media server rather than a player.
    pub fn is_server(&self) -> bool {
        self.provides.split(',').any(|p| p.trim() == "server")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Connection {
    #[serde(default, rename = "@protocol")]
    pub protocol: String,
    #[serde(default, rename = "@address")]
    pub address: String,
    #[serde(default, rename = "@port", deserialize_with = "empty_as_none")]
    pub port: Option<u16>,
    #[serde(rename = "@uri")]
    pub uri: String,
    #[serde(default, rename = "@local", deserialize_with = "flag")]
    pub local: bool,
}
