use tracing::{info, warn};
use uuid::Uuid;

pub const APPLICATION_NAME_VAR: &str = "PLEX_APPLICATION_NAME";
pub const DEVICE_NAME_VAR: &str = "PLEX_DEVICE_NAME";
pub const CLIENT_ID_VAR: &str = "PLEX_CLIENT_ID";

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Environment variable {var} is not set")]
    Missing { var: &'static str },
    #[error("{value:?} is not a valid client identifier UUID")]
    InvalidClientId { value: String },
}

/// Device identity stamped onto every outbound request.
///
/// Plex ties device registrations and OAuth pins to `client_id`, so it should
/// stay stable across restarts of the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    application_name: String,
    device_name: String,
    client_id: Uuid,
}

impl ClientIdentity {
    pub fn new(
        application_name: impl Into<String>,
        device_name: impl Into<String>,
        client_id: Uuid,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            device_name: device_name.into(),
            client_id,
        }
    }

    /// Load the identity from `PLEX_APPLICATION_NAME`, `PLEX_DEVICE_NAME`
    /// and `PLEX_CLIENT_ID`.
    ///
    /// A missing client id is replaced by a random one; Plex will then see a
    /// new device on every start.
    pub fn from_env() -> Result<Self, IdentityError> {
        let application_name = require_var(APPLICATION_NAME_VAR)?;
        let device_name = require_var(DEVICE_NAME_VAR)?;

        let client_id = match std::env::var(CLIENT_ID_VAR) {
            Ok(value) => Uuid::parse_str(value.trim())
                .map_err(|_| IdentityError::InvalidClientId { value })?,
            Err(_) => {
                let generated = Uuid::new_v4();
                warn!(client_id = %generated.simple(), "no {CLIENT_ID_VAR} set, generated a new client id");
                generated
            }
        };

        info!(%application_name, %device_name, "loaded plex client identity from env");
        Ok(Self::new(application_name, device_name, client_id))
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    /// Client id as 32 lowercase hex digits without hyphens.
    pub fn client_identifier(&self) -> String {
        self.client_id.simple().to_string()
    }
}

fn require_var(var: &'static str) -> Result<String, IdentityError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(IdentityError::Missing { var })
}
