mod auth;
mod client;
mod error;
mod graphql;
mod metadata;

use error::MetadataError;

pub use client::Client;
pub use metadata::{LookupRequest, ProjectMetadata};
pub(crate) use auth::resolve_token;
pub(crate) use metadata::resolve_project_metadata;

pub(crate) mod prelude {
    pub use super::Client;
    pub use super::LookupRequest;
    pub(crate) use super::{resolve_project_metadata, resolve_token};
}
