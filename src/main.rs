mod github;
mod inputs;
mod outputs;

use crate::github::prelude::*;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(inputs::Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            outputs::set_failed(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: inputs::Cli) -> anyhow::Result<()> {
    let inputs::Inputs {
        hostname,
        token,
        request,
    } = cli.into_inputs()?;

    let client = Client::new(&hostname, token)?;
    let metadata = resolve_project_metadata(&client, &request).await?;
    outputs::write_outputs(&metadata)?;

    Ok(())
}

fn init_tracing() {
    let default_filter = if std::env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1") {
        "gh_project_metadata=debug"
    } else {
        "gh_project_metadata=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
