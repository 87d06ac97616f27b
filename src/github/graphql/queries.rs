use serde_json::Value;

use super::types::ProjectNumber;

pub(crate) const PROJECT_METADATA_QUERY: &str =
    include_str!("queries/project_metadata.graphql");

pub(crate) fn project_metadata_payload(org: &str, project_number: ProjectNumber) -> Value {
    serde_json::json!({
        "query": PROJECT_METADATA_QUERY,
        "variables": { "org": org, "projectNumber": project_number.get() },
    })
}
