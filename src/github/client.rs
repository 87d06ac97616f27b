use anyhow::Context;

use super::MetadataError;
use super::graphql::{Organization, ProjectNumber, query_organization};
use super::metadata::OrganizationSource;

pub struct Client {
    octocrab: octocrab::Octocrab,
}

impl Client {
    pub fn new(host: &str, token: String) -> anyhow::Result<Self> {
        let octocrab = build_github_client(host, token)?;
        Ok(Self { octocrab })
    }
}

#[async_trait::async_trait]
impl OrganizationSource for Client {
    async fn fetch_organization(
        &self,
        org: &str,
        project_number: ProjectNumber,
    ) -> Result<Organization, MetadataError> {
        query_organization(&self.octocrab, org, project_number).await
    }
}

fn build_github_client(host: &str, token: String) -> anyhow::Result<octocrab::Octocrab> {
    let client = octocrab::Octocrab::builder()
        .base_uri(api_base_url(host))
        .context("failed to set base URI")?
        .personal_token(token)
        .build()
        .context("failed to build GitHub client")?;
    Ok(client)
}

fn api_base_url(host: &str) -> String {
    if host.eq_ignore_ascii_case("github.com") {
        "https://api.github.com".to_string()
    } else {
        format!("https://{host}/api")
    }
}
