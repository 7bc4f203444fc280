//! Async client for the plex.tv account service and Plex Media Server.
//!
//! Every call is described by an [`ApiRequest`], stamped with the device
//! identity headers and dispatched through a shared [`HttpClient`]. Auth
//! tokens and media server hosts are supplied per call; the clients hold no
//! other state.

pub mod client;
pub mod dual;
pub mod endpoints;
pub mod format;
pub mod headers;
pub mod identity;
pub mod library;
pub mod models;
pub mod oauth;
pub mod plex;
pub mod request;

pub use client::{ApiError, HttpClient};
pub use dual::DualSchemaResult;
pub use format::{ContentType, DecodeFailure};
pub use identity::{ClientIdentity, IdentityError};
pub use library::PlexLibraryClient;
pub use plex::PlexClient;
pub use request::ApiRequest;
