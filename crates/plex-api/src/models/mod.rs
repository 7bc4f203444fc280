//! Response and request bodies for plex.tv and Plex Media Server.
//!
//! JSON types use Plex's camelCase names; XML types map attributes with the
//! `@` prefix that `quick-xml` expects.

mod account;
mod friends;
mod media;
mod oauth;
mod search;
mod server;
mod sharing;

pub use account::{PlexAccount, PlexAuthentication, Roles, Subscription, User, UserRequest};
pub(crate) use account::SignInBody;
pub use friends::{Friend, FriendServer, PlexFriends};
pub use media::{
    Directory, FieldType, Hub, Media, MediaContainer, MediaContainerResponse, Meta, Metadata,
    Operator, Part, PlexStatus, Tag,
};
pub use oauth::OAuthPin;
pub use search::{CollectionModel, FilterRequest, LibrarySearch, SearchType};
pub use server::{Connection, PlexServers, Resource, ResourceContainer, Server};
pub use sharing::{
    AddUserError, PlexAdd, Section, SharedServer, SharedServerInvite, SharedServerRequest,
    SharingSettings,
};

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Plex sends some numeric ids as JSON numbers and others as strings.
pub(crate) fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// XML flag attributes arrive as `"0"`/`"1"`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid flag {other:?}"))),
    }
}

/// Numeric XML attributes are sometimes sent blank (`port=""`).
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ContentType;

    #[test]
    fn blank_numeric_attributes_decode_as_none() {
        let xml = r#"<MediaContainer size="1">
  <Server name="Home" machineIdentifier="m-1" address="" port="" createdAt="" owned="1"/>
</MediaContainer>"#;
        let servers: PlexServers = ContentType::Xml.deserialize(xml).unwrap();
        let home = &servers.servers[0];
        assert_eq!(home.port, None);
        assert_eq!(home.created_at, None);
        assert!(home.public_uri().is_none());
    }

    #[test]
    fn numeric_attributes_still_parse() {
        let xml = r#"<MediaContainer>
  <User id="1" title="alice"><Server name="Home" numLibraries=" 3 "/></User>
  <User id="2" title="bob"><Server name="Away" numLibraries=""/></User>
</MediaContainer>"#;
        let friends: PlexFriends = ContentType::Xml.deserialize(xml).unwrap();
        assert_eq!(friends.users[0].servers[0].num_libraries, Some(3));
        assert_eq!(friends.users[1].servers[0].num_libraries, None);
    }

    #[test]
    fn garbage_numeric_attribute_is_rejected() {
        let xml = r#"<MediaContainer><Server name="Home" machineIdentifier="m-1" port="http"/></MediaContainer>"#;
        assert!(ContentType::Xml.deserialize::<PlexServers>(xml).is_err());
    }
}
