use std::fmt;
use std::str::FromStr;

use crate::github::MetadataError;

/// Project number as accepted by `projectV2(number: Int!)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectNumber(i32);

impl ProjectNumber {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for ProjectNumber {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(number) if number > 0 => Ok(Self(number)),
            _ => Err(MetadataError::InvalidProjectNumber),
        }
    }
}

impl fmt::Display for ProjectNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Organization {
    #[serde(rename = "projectV2")]
    pub project_v2: Option<ProjectV2>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ProjectV2 {
    pub id: String,
    pub fields: Option<FieldConnection>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct FieldConnection {
    pub nodes: Option<Vec<Option<FieldNode>>>,
}

/// A project field, keyed by its GraphQL `__typename`.
///
/// Only single select fields carry a payload; every other kind decodes to
/// [`FieldNode::Other`] whatever it contains.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "__typename")]
pub enum FieldNode {
    #[serde(rename = "ProjectV2SingleSelectField")]
    SingleSelect(SingleSelectField),
    #[serde(other)]
    Other,
}

impl FieldNode {
    pub fn as_single_select(&self) -> Option<&SingleSelectField> {
        match self {
            FieldNode::SingleSelect(field) => Some(field),
            FieldNode::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SingleSelectField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl SingleSelectField {
    /// First option whose name equals `name` exactly.
    pub fn option_named(&self, name: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct OrganizationData {
    pub organization: Option<Organization>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_number_accepts_positive_integers() {
        assert_eq!("7".parse::<ProjectNumber>().unwrap().get(), 7);
        assert_eq!(" 42\n".parse::<ProjectNumber>().unwrap().get(), 42);
    }

    #[test]
    fn project_number_rejects_non_integers() {
        for input in ["", "seven", "7.5", "0", "-3", "99999999999"] {
            assert!(
                matches!(
                    input.parse::<ProjectNumber>(),
                    Err(MetadataError::InvalidProjectNumber)
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn field_nodes_decode_by_typename() {
        let connection: FieldConnection = serde_json::from_value(json!({
            "nodes": [
                { "__typename": "ProjectV2Field" },
                { "__typename": "ProjectV2IterationField", "id": "PVTIF_1", "name": "Sprint" },
                null,
                {
                    "__typename": "ProjectV2SingleSelectField",
                    "id": "PVTSSF_1",
                    "name": "Status",
                    "options": [{ "__typename": "ProjectV2SingleSelectFieldOption", "id": "OPT_9", "name": "Done" }]
                }
            ]
        }))
        .unwrap();

        let nodes = connection.nodes.unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0], Some(FieldNode::Other));
        assert_eq!(nodes[1], Some(FieldNode::Other));
        assert_eq!(nodes[2], None);

        let field = nodes[3].as_ref().and_then(FieldNode::as_single_select).unwrap();
        assert_eq!(field.id, "PVTSSF_1");
        assert_eq!(field.name, "Status");
        assert_eq!(field.option_named("Done").map(|o| o.id.as_str()), Some("OPT_9"));
        assert_eq!(field.option_named("done"), None);
    }

    #[test]
    fn other_field_kinds_ignore_nested_payload() {
        let node: FieldNode = serde_json::from_value(json!({
            "__typename": "ProjectV2IterationField",
            "id": "PVTIF_1",
            "name": "Status",
            "configuration": {
                "duration": 14,
                "iterations": [{ "id": "it-1", "title": "Sprint 1" }]
            }
        }))
        .unwrap();

        assert_eq!(node, FieldNode::Other);
        assert_eq!(node.as_single_select(), None);
    }

    #[test]
    fn single_select_without_options_decodes_empty() {
        let node: FieldNode = serde_json::from_value(json!({
            "__typename": "ProjectV2SingleSelectField",
            "id": "PVTSSF_2",
            "name": "Empty"
        }))
        .unwrap();

        assert_eq!(node.as_single_select().unwrap().options, Vec::new());
    }
}
