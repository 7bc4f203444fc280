//! Browser URL for approving a device-link PIN.

use reqwest::Method;
use url::Url;

use crate::client::ApiError;
use crate::identity::ClientIdentity;
use crate::request::ApiRequest;

pub const DEFAULT_APP_URL: &str = "https://app.plex.tv/";

const AUTH_PATH: &str = "auth#";

/// Build the URL a user opens to approve PIN `code` for this device.
///
/// The Plex web app reads its parameters from the fragment, so the result has
/// the shape `https://app.plex.tv/auth#?code=...` rather than the conventional
/// `...auth?code=...#`.
pub fn build_linking_url(
    app_url: &str,
    identity: &ClientIdentity,
    code: &str,
) -> Result<Url, ApiError> {
    let mut request = ApiRequest::json(AUTH_PATH, app_url, Method::GET);
    request.add_query_string("code", code);
    request.add_query_string("context[device][product]", identity.application_name());
    request.add_query_string("context[device][environment]", "bundled");
    request.add_query_string("context[device][layout]", "desktop");
    request.add_query_string("context[device][platform]", "Web");
    request.add_query_string("context[device][device]", identity.device_name());
    request.add_query_string("clientID", identity.client_identifier());

    let url = request.full_uri()?;
    if url.fragment() != Some("") {
        return Ok(url);
    }

    let mut uri = String::from(url.as_str());
    uri.pop();
    if let Some(query_start) = uri.find('?') {
        uri.insert(query_start, '#');
    }
    Ok(Url::parse(&uri)?)
}
