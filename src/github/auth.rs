use anyhow::Context;

const TOKEN_NOT_SUPPLIED: &str = "[GitHub Token NOT SUPPLIED] gh_token must be supplied. \
It is used to authenticate the query. It could be your Personal Access Token (PAT) (not recommended) \
with org permission or token generated from your GitHub app with org permission (recommended)";

fn env_token_keys(host: &str) -> [&'static str; 2] {
    if host.eq_ignore_ascii_case("github.com") {
        ["GH_TOKEN", "GITHUB_TOKEN"]
    } else {
        ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    }
}

fn token_from_env(host: &str) -> Option<String> {
    env_token_keys(host)
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

/// Asks the `gh` CLI for its stored token. A missing `gh` binary or a failed
/// login is not an error, just no token.
fn token_from_gh(host: &str) -> anyhow::Result<Option<String>> {
    let output = match std::process::Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).context("[GitHub Token NOT SUPPLIED] failed to run `gh auth token`");
        }
    };

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(output.status.success().then_some(token).filter(|token| !token.is_empty()))
}

/// Picks the token for `host`: the `gh_token` input first, then the usual
/// token environment variables, then the `gh` CLI.
pub(crate) fn resolve_token(host: &str, supplied: &str) -> anyhow::Result<String> {
    let supplied = supplied.trim();
    if !supplied.is_empty() {
        tracing::info!("GitHub token supplied");
        return Ok(supplied.to_string());
    }
    if let Some(token) = token_from_env(host) {
        tracing::info!("GitHub token taken from environment");
        return Ok(token);
    }
    if let Some(token) = token_from_gh(host)? {
        tracing::info!("GitHub token taken from gh CLI");
        return Ok(token);
    }

    anyhow::bail!(TOKEN_NOT_SUPPLIED);
}

#[cfg(test)]
mod tests {
    use super::{env_token_keys, resolve_token};
    use temp_env::with_vars;

    #[test]
    fn enterprise_hosts_read_enterprise_variables() {
        assert_eq!(env_token_keys("github.com"), ["GH_TOKEN", "GITHUB_TOKEN"]);
        assert_eq!(
            env_token_keys("ghe.example.com"),
            ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
        );
    }

    #[test]
    fn supplied_token_wins() {
        with_vars([("GH_TOKEN", Some("gh-token"))], || {
            let token = resolve_token("github.com", " input-token ").unwrap();
            assert_eq!(token, "input-token");
        });
    }

    #[test]
    fn token_prefers_gh_token() {
        with_vars(
            [
                ("GH_TOKEN", Some("gh-token")),
                ("GITHUB_TOKEN", Some("github-token")),
            ],
            || {
                let token = resolve_token("github.com", "").unwrap();
                assert_eq!(token, "gh-token");
            },
        );
    }

    #[test]
    fn token_env_differs_by_host() {
        with_vars(
            [
                ("GH_TOKEN", Some("gh-token")),
                ("GH_ENTERPRISE_TOKEN", Some("ghe-token")),
            ],
            || {
                let github_token = resolve_token("github.com", "").unwrap();
                assert_eq!(github_token, "gh-token");

                let ghe_token = resolve_token("ghe.example.com", "").unwrap();
                assert_eq!(ghe_token, "ghe-token");
            },
        );
    }

    #[test]
    fn token_skips_empty_env_vars() {
        with_vars(
            [
                ("GH_TOKEN", Some("")),
                ("GITHUB_TOKEN", Some("github-token")),
            ],
            || {
                let token = resolve_token("github.com", "").unwrap();
                assert_eq!(token, "github-token");
            },
        );
    }
}
