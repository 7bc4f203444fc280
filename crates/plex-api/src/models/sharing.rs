use serde::{Deserialize, Serialize};

use super::flag;

/// Body of `api/servers/{id}/shared_servers`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "SharedServerRequest")]
pub struct SharedServerRequest {
    pub server_id: String,
    pub shared_server: SharedServerInvite,
    pub sharing_settings: SharingSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct SharedServerInvite {
    pub library_section_ids: Vec<i64>,
    pub invited_email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SharingSettings {}

impl SharedServerRequest {
    /// Share `libraries` of `server_id` with `email`; an empty list shares none.
    pub fn new(server_id: &str, email: &str, libraries: &[i64]) -> Self {
        Self {
            server_id: server_id.to_string(),
            shared_server: SharedServerInvite {
                library_section_ids: libraries.to_vec(),
                invited_email: email.to_string(),
            },
            sharing_settings: SharingSettings::default(),
        }
    }
}

/// Success body of the share call: a `MediaContainer` holding the new share.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexAdd {
    #[serde(default, rename = "@machineIdentifier")]
    pub machine_identifier: String,
    #[serde(rename = "SharedServer")]
    pub shared_server: SharedServer,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharedServer {
    #[serde(default, rename = "@id")]
    pub id: String,
    #[serde(default, rename = "@username")]
    pub username: String,
    #[serde(default, rename = "@email")]
    pub email: String,
    #[serde(default, rename = "@userID")]
    pub user_id: String,
    #[serde(default, rename = "@accessToken")]
    pub access_token: String,
    #[serde(default, rename = "@name")]
    pub name: String,
    #[serde(default, rename = "@acceptedAt")]
    pub accepted_at: String,
    #[serde(default, rename = "@invitedAt")]
    pub invited_at: String,
    #[serde(default, rename = "@allowSync", deserialize_with = "flag")]
    pub allow_sync: bool,
    #[serde(default, rename = "@owned", deserialize_with = "flag")]
    pub owned: bool,
    #[serde(default, rename = "Section")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
    #[serde(default, rename = "@id")]
    pub id: String,
    #[serde(default, rename = "@key")]
    pub key: String,
    #[serde(default, rename = "@title")]
    pub title: String,
    #[serde(default, rename = "@type")]
    pub kind: String,
    #[serde(default, rename = "@shared", deserialize_with = "flag")]
    pub shared: bool,
}

/// Failure body of the share call: `<Response code=".." status=".."/>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddUserError {
    #[serde(rename = "@code")]
    pub code: i64,
    #[serde(rename = "@status")]
    pub status: String,
}
