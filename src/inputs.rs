//! Action inputs. Each flag falls back to the `INPUT_*` variable the runner sets.

use crate::github::prelude::*;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Resolve GitHub Projects (v2) project, field and option ids")]
pub(crate) struct Cli {
    #[arg(
        long,
        env = "INPUT_GH_TOKEN",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true,
        help = "Token with org permission; falls back to GH_TOKEN or `gh auth token`"
    )]
    gh_token: String,
    #[arg(
        long,
        env = "INPUT_ORG",
        default_value = "",
        hide_default_value = true,
        help = "Organization login; defaults to the repository owner"
    )]
    org: String,
    #[arg(
        long,
        env = "INPUT_PROJECT_NUMBER",
        default_value = "",
        hide_default_value = true,
        help = "Project number within the organization"
    )]
    project_number: String,
    #[arg(
        long,
        env = "INPUT_SINGLE_SELECT_FIELD_NAME",
        default_value = "",
        hide_default_value = true,
        help = "Name of the single select field to resolve"
    )]
    single_select_field_name: String,
    #[arg(
        long,
        env = "INPUT_SINGLE_SELECT_FIELD_OPTION_NAME",
        default_value = "",
        hide_default_value = true,
        help = "Name of the option to resolve within the single select field"
    )]
    single_select_field_option_name: String,
    #[arg(
        long,
        value_name = "HOST",
        default_value = "github.com",
        help = "Target GitHub hostname",
        env = "GH_HOST"
    )]
    hostname: String,
}

pub(crate) struct Inputs {
    pub hostname: String,
    pub token: String,
    pub request: LookupRequest,
}

impl Cli {
    pub(crate) fn into_inputs(self) -> anyhow::Result<Inputs> {
        let request = self.lookup_request()?;
        let token = resolve_token(&self.hostname, &self.gh_token)?;
        Ok(Inputs {
            hostname: self.hostname,
            token,
            request,
        })
    }

    fn lookup_request(&self) -> anyhow::Result<LookupRequest> {
        let org = match self.org.trim() {
            "" => {
                let org = default_org()?;
                tracing::info!(%org, "organization not supplied, defaulting to repository owner");
                org
            }
            org => {
                tracing::info!(%org, "organization supplied");
                org.to_string()
            }
        };

        let project_number = self.project_number.trim();
        if project_number.is_empty() {
            anyhow::bail!(
                "[Project Number NOT SUPPLIED] project_number must be supplied. \
                 It is used to identify and query metadata of your GitHub Project"
            );
        }
        tracing::info!(project_number, "project number supplied");

        let field_name = optional_input(&self.single_select_field_name);
        match field_name.as_deref() {
            Some(name) => tracing::info!(field = name, "single select field name supplied"),
            None => tracing::info!("single select field name not supplied"),
        }

        let option_name = optional_input(&self.single_select_field_option_name);
        match (option_name.as_deref(), field_name.is_some()) {
            (Some(_), false) => anyhow::bail!(
                "[Single Select Field Option Name GET FAILED] \
                 Cannot get option without single_select_field_name."
            ),
            (Some(name), true) => {
                tracing::info!(option = name, "single select field option name supplied")
            }
            (None, _) => tracing::info!("single select field option name not supplied"),
        }

        Ok(LookupRequest {
            org,
            project_number: project_number.to_string(),
            field_name,
            option_name,
        })
    }
}

fn optional_input(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn default_org() -> anyhow::Result<String> {
    if let Ok(owner) = std::env::var("GITHUB_REPOSITORY_OWNER")
        && !owner.trim().is_empty()
    {
        return Ok(owner.trim().to_string());
    }
    if let Ok(repository) = std::env::var("GITHUB_REPOSITORY")
        && let Some((owner, _)) = repository.split_once('/')
        && !owner.is_empty()
    {
        return Ok(owner.to_string());
    }

    anyhow::bail!(
        "[Organization NOT SUPPLIED] org must be supplied when GITHUB_REPOSITORY_OWNER is not set"
    );
}
