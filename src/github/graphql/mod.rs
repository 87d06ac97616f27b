mod fetch;
mod queries;
mod types;

pub use types::{FieldNode, Organization, ProjectNumber, ProjectV2, SingleSelectField};

pub(crate) use fetch::query_organization;
