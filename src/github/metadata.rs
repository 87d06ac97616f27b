//! Resolution of project, single select field and option node ids.
//!
//! A lookup walks project -> field -> option. Each step after the project only
//! runs when its name was supplied, and the first requested step that cannot
//! be satisfied ends the whole lookup with a [`MetadataError`].

use tracing::{debug, info};

use super::MetadataError;
use super::graphql::{FieldNode, Organization, ProjectNumber, ProjectV2, SingleSelectField};

/// Anything that can answer the project metadata query for an organization.
#[async_trait::async_trait]
pub trait OrganizationSource: Send + Sync {
    async fn fetch_organization(
        &self,
        org: &str,
        project_number: ProjectNumber,
    ) -> Result<Organization, MetadataError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub org: String,
    /// Raw input; validated before any request is sent.
    pub project_number: String,
    pub field_name: Option<String>,
    pub option_name: Option<String>,
}

/// Ids resolved so far. Every setter consumes the snapshot and returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    project_id: Option<String>,
    field_id: Option<String>,
    option_id: Option<String>,
}

impl ProjectMetadata {
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn field_id(&self) -> Option<&str> {
        self.field_id.as_deref()
    }

    pub fn option_id(&self) -> Option<&str> {
        self.option_id.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn from_ids(
        project_id: &str,
        field_id: Option<&str>,
        option_id: Option<&str>,
    ) -> Self {
        Self {
            project_id: Some(project_id.to_string()),
            field_id: field_id.map(str::to_string),
            option_id: option_id.map(str::to_string),
        }
    }

    fn with_project_id(self, id: &str) -> Self {
        debug_assert!(self.project_id.is_none());
        Self {
            project_id: Some(id.to_string()),
            ..self
        }
    }

    fn with_field_id(self, id: &str) -> Self {
        debug_assert!(self.field_id.is_none());
        Self {
            field_id: Some(id.to_string()),
            ..self
        }
    }

    fn with_option_id(self, id: &str) -> Self {
        debug_assert!(self.option_id.is_none());
        Self {
            option_id: Some(id.to_string()),
            ..self
        }
    }
}

pub(crate) async fn resolve_project_metadata<S>(
    source: &S,
    request: &LookupRequest,
) -> Result<ProjectMetadata, MetadataError>
where
    S: OrganizationSource + ?Sized,
{
    let project_number: ProjectNumber = request.project_number.parse()?;

    let organization = source
        .fetch_organization(&request.org, project_number)
        .await?;
    let project = organization
        .project_v2
        .ok_or(MetadataError::ProjectNotFound(project_number))?;

    let metadata = ProjectMetadata::default().with_project_id(&project.id);
    info!("project id resolved");
    debug!(project_id = %project.id);

    let Some(field_name) = non_empty(request.field_name.as_deref()) else {
        return Ok(metadata);
    };

    let field = single_select_field(&project, field_name)?;
    let metadata = metadata.with_field_id(&field.id);
    info!(field = field_name, "single select field id resolved");
    debug!(field_id = %field.id);

    let Some(option_name) = non_empty(request.option_name.as_deref()) else {
        return Ok(metadata);
    };

    let option = field
        .option_named(option_name)
        .ok_or_else(|| MetadataError::OptionNotFound(option_name.to_string()))?;
    let metadata = metadata.with_option_id(&option.id);
    info!(option = option_name, "single select field option id resolved");
    debug!(option_id = %option.id);

    Ok(metadata)
}

/// First single select field named exactly `name`. Other field kinds never match.
fn single_select_field<'a>(
    project: &'a ProjectV2,
    name: &str,
) -> Result<&'a SingleSelectField, MetadataError> {
    let nodes = project
        .fields
        .as_ref()
        .and_then(|fields| fields.nodes.as_ref())
        .ok_or(MetadataError::FieldsNotFound)?;

    nodes
        .iter()
        .flatten()
        .filter_map(FieldNode::as_single_select)
        .find(|field| field.name == name)
        .ok_or_else(|| MetadataError::SingleSelectFieldNotFound(name.to_string()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
