//! Failures of a project metadata lookup.

use super::graphql::ProjectNumber;

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("[Project Number INVALID] projectNumber must be a number")]
    InvalidProjectNumber,

    #[error("[Organization NOT FOUND]")]
    OrganizationNotFound,

    /// The API answered with GraphQL errors. The messages are logged, not kept.
    #[error("[GraphQL Request FAILED]")]
    RequestFailed,

    #[error("[Project NOT FOUND] project_number: {0}")]
    ProjectNotFound(ProjectNumber),

    #[error("[Fields NOT FOUND]")]
    FieldsNotFound,

    #[error("[Single Select Field NOT FOUND] ssfName: {0}")]
    SingleSelectFieldNotFound(String),

    #[error("[Single Select Field Option NOT FOUND] ssfOptionName: {0}")]
    OptionNotFound(String),

    #[error(transparent)]
    Transport(#[from] octocrab::Error),
}
