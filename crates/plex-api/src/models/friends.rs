use serde::Deserialize;

use super::{empty_as_none, flag};

/// Response of `pms/friends/all` (XML).
///
/// Home users have no username or email; their display name is in `title`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlexFriends {
    #[serde(default, rename = "User")]
    pub users: Vec<Friend>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Friend {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default, rename = "@title")]
    pub title: String,
    #[serde(default, rename = "@username")]
    pub username: String,
    #[serde(default, rename = "@email")]
    pub email: String,
    #[serde(default, rename = "@thumb")]
    pub thumb: String,
    #[serde(default, rename = "@home", deserialize_with = "flag")]
    pub home: bool,
    #[serde(default, rename = "@restricted", deserialize_with = "flag")]
    pub restricted: bool,
    #[serde(default, rename = "Server")]
    pub servers: Vec<FriendServer>,
}

/// A server shared with a [`Friend`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendServer {
    #[serde(default, rename = "@id")]
    pub id: String,
    #[serde(default, rename = "@serverId")]
    pub server_id: String,
    #[serde(default, rename = "@machineIdentifier")]
    pub machine_identifier: String,
    #[serde(default, rename = "@name")]
    pub name: String,
    #[serde(default, rename = "@numLibraries", deserialize_with = "empty_as_none")]
    pub num_libraries: Option<i64>,
    #[serde(default, rename = "@owned", deserialize_with = "flag")]
    pub owned: bool,
}
