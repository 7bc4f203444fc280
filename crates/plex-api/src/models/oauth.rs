use serde::Deserialize;

/// A device-link PIN from `api/v2/pins`.
///
/// `auth_token` stays empty until the user approves the PIN in a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthPin {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub trusted: bool,
    #[serde(default)]
    pub client_identifier: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl OAuthPin {
    pub fn is_approved(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
