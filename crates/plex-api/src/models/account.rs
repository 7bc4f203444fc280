use serde::{Deserialize, Serialize};

use super::int_or_string;

/// Credentials posted to `users/sign_in.json`.
#[derive(Debug, Clone, Serialize)]
pub struct UserRequest {
    pub login: String,
    pub password: String,
    #[serde(rename = "rememberMe", skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

impl UserRequest {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            remember_me: None,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct SignInBody<'a> {
    pub user: &'a UserRequest,
}

/// Response of `users/sign_in.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexAuthentication {
    pub user: User,
}

/// Response of `users/account.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexAccount {
    pub user: User,
}

/// A plex.tv account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i64,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default, rename = "joined_at")]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub confirmed_at: Option<String>,
    #[serde(default)]
    pub has_password: bool,
    #[serde(default, rename = "authentication_token", alias = "authToken")]
    pub authentication_token: String,
    #[serde(default)]
    pub forum_id: Option<i64>,
    #[serde(default)]
    pub remember_me: bool,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub roles: Option<Roles>,
    #[serde(default)]
    pub entitlements: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roles {
    #[serde(default)]
    pub roles: Vec<String>,
}
