use serde::de::DeserializeOwned;

use crate::client::ApiError;
use crate::format::{ContentType, DecodeFailure};

/// Outcome of an endpoint whose success and failure bodies share no
/// discriminant field. Exactly one branch is ever populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DualSchemaResult<S, E> {
    Success(S),
    Error(E),
}

impl<S, E> DualSchemaResult<S, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, DualSchemaResult::Success(_))
    }

    pub fn success(self) -> Option<S> {
        match self {
            DualSchemaResult::Success(s) => Some(s),
            DualSchemaResult::Error(_) => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            DualSchemaResult::Success(_) => None,
            DualSchemaResult::Error(e) => Some(e),
        }
    }

    /// Convert into a `Result`, treating the error schema as `Err`.
    pub fn into_result(self) -> Result<S, E> {
        match self {
            DualSchemaResult::Success(s) => Ok(s),
            DualSchemaResult::Error(e) => Err(e),
        }
    }
}

/// Decode `content` as `S`, falling back to `E` only on a schema mismatch.
///
/// A body that is not well-formed fails immediately with
/// [`ApiError::Deserialize`]; a well-formed body matching neither type fails
/// with [`ApiError::AmbiguousSchema`].
pub fn resolve<S, E>(format: ContentType, content: &str) -> Result<DualSchemaResult<S, E>, ApiError>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    let success_mismatch = match format.deserialize::<S>(content) {
        Ok(success) => return Ok(DualSchemaResult::Success(success)),
        Err(ApiError::Deserialize {
            failure: DecodeFailure::SchemaMismatch,
            message,
            ..
        }) => message,
        Err(other) => return Err(other),
    };

    match format.deserialize::<E>(content) {
        Ok(error) => Ok(DualSchemaResult::Error(error)),
        Err(ApiError::Deserialize {
            failure: DecodeFailure::SchemaMismatch,
            message,
            ..
        }) => Err(ApiError::AmbiguousSchema {
            success: success_mismatch,
            error: message,
        }),
        Err(other) => Err(other),
    }
}
