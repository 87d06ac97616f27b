use crate::github::MetadataError;

use super::queries::project_metadata_payload;
use super::types::*;

/// Runs the project metadata query once and returns the `organization` object.
pub(crate) async fn query_organization(
    client: &octocrab::Octocrab,
    org: &str,
    project_number: ProjectNumber,
) -> Result<Organization, MetadataError> {
    let payload = project_metadata_payload(org, project_number);

    let resp = client
        .graphql::<GraphqlResponse<OrganizationData>>(&payload)
        .await?;
    tracing::debug!(response = ?resp, "project metadata query returned");

    organization_from_response(resp, &payload)
}

pub(super) fn organization_from_response(
    resp: GraphqlResponse<OrganizationData>,
    payload: &serde_json::Value,
) -> Result<Organization, MetadataError> {
    graphql_data(resp, payload)?
        .and_then(|data| data.organization)
        .ok_or(MetadataError::OrganizationNotFound)
}

pub(super) fn graphql_data<T>(
    resp: GraphqlResponse<T>,
    payload: &serde_json::Value,
) -> Result<Option<T>, MetadataError> {
    if let Some(errors) = resp.errors.filter(|errors| !errors.is_empty()) {
        tracing::error!(request = %payload, "GraphQL request returned errors");
        for error in errors {
            tracing::error!("{}", error.message);
        }
        return Err(MetadataError::RequestFailed);
    }
    Ok(resp.data)
}
