//! Mandatory Plex request headers.

use crate::identity::ClientIdentity;
use crate::request::ApiRequest;

pub const CLIENT_IDENTIFIER: &str = "X-Plex-Client-Identifier";
pub const PRODUCT: &str = "X-Plex-Product";
pub const VERSION: &str = "X-Plex-Version";
pub const DEVICE: &str = "X-Plex-Device";
pub const PLATFORM: &str = "X-Plex-Platform";
pub const TOKEN: &str = "X-Plex-Token";
pub const CONTAINER_START: &str = "X-Plex-Container-Start";
pub const CONTAINER_SIZE: &str = "X-Plex-Container-Size";

pub const PROTOCOL_VERSION: &str = "3";
pub const PLATFORM_NAME: &str = "Web";

/// Stamp the device identity, content negotiation headers and, when given,
/// the auth token onto `request`.
///
/// An empty token is treated as absent: `X-Plex-Token` is never sent blank.
pub fn apply_identity(request: &mut ApiRequest, identity: &ClientIdentity, token: Option<&str>) {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        request.add_header(TOKEN, token);
    }
    request.add_header(CLIENT_IDENTIFIER, identity.client_identifier());
    request.add_header(PRODUCT, identity.application_name());
    request.add_header(VERSION, PROTOCOL_VERSION);
    request.add_header(DEVICE, identity.device_name());
    request.add_header(PLATFORM, PLATFORM_NAME);
    request.add_header("Content-Type", request.content_type().mime());
    // Plex answers JSON where it can, even for endpoints modelled as XML.
    request.add_header("Accept", "application/json");
}

/// Request the `[start, start + size)` window of a list endpoint.
///
/// No range checks; the server decides what is valid.
pub fn apply_container_window(request: &mut ApiRequest, start: i64, size: i64) {
    request.add_header(CONTAINER_START, start.to_string());
    request.add_header(CONTAINER_SIZE, size.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ContentType;
    use reqwest::Method;
    use uuid::Uuid;

    fn identity() -> ClientIdentity {
        ClientIdentity::new(
            "Requestrr",
            "Living Room",
            Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        )
    }

    #[test]
    fn identity_headers_are_stamped() {
        let mut req = ApiRequest::json("library/sections", "http://pms:32400", Method::GET);
        apply_identity(&mut req, &identity(), None);

        assert_eq!(
            req.header(CLIENT_IDENTIFIER),
            Some("00000000000040008000000000000001")
        );
        assert_eq!(req.header(PRODUCT), Some("Requestrr"));
        assert_eq!(req.header(VERSION), Some("3"));
        assert_eq!(req.header(DEVICE), Some("Living Room"));
        assert_eq!(req.header(PLATFORM), Some("Web"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));
    }

    #[test]
    fn xml_request_still_accepts_json() {
        let mut req = ApiRequest::new("pms/servers.xml", "https://plex.tv", Method::GET, ContentType::Xml);
        apply_identity(&mut req, &identity(), None);
        assert_eq!(req.header("Content-Type"), Some("application/xml"));
        assert_eq!(req.header("Accept"), Some("application/json"));
    }

    #[test]
    fn token_omitted_when_absent_or_empty() {
        for token in [None, Some("")] {
            let mut req = ApiRequest::json("api/v2/pins/1", "https://plex.tv", Method::GET);
            apply_identity(&mut req, &identity(), token);
            assert!(req.header(TOKEN).is_none(), "token={token:?}");
        }
    }

    #[test]
    fn token_sent_verbatim() {
        let mut req = ApiRequest::json("users/account.json", "https://plex.tv", Method::GET);
        apply_identity(&mut req, &identity(), Some("abc-123_XYZ"));
        assert_eq!(req.header(TOKEN), Some("abc-123_XYZ"));
    }

    #[test]
    fn container_window_uses_decimal_strings() {
        let mut req = ApiRequest::json("library/sections/1/all", "http://pms:32400", Method::GET);
        apply_container_window(&mut req, 0, 50);
        apply_container_window(&mut req, 100, -1);
        assert_eq!(req.header(CONTAINER_START), Some("100"));
        assert_eq!(req.header(CONTAINER_SIZE), Some("-1"));
        assert_eq!(req.headers().len(), 2);
    }
}
