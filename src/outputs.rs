use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::github::ProjectMetadata;

const PROJECT_ID: &str = "project_id";
const FIELD_ID: &str = "single_select_field_id";
const OPTION_ID: &str = "single_select_field_option_id";

/// Named step outputs for every resolved id, in a stable order.
pub fn step_outputs(metadata: &ProjectMetadata) -> Vec<(&'static str, &str)> {
    [
        (PROJECT_ID, metadata.project_id()),
        (FIELD_ID, metadata.field_id()),
        (OPTION_ID, metadata.option_id()),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| (name, value)))
    .collect()
}

pub fn format_outputs(outputs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, value) in outputs {
        out.push_str(&format!("{name}={value}\n"));
    }
    out
}

/// Appends outputs to the `GITHUB_OUTPUT` file, or prints them when running
/// outside a runner.
pub fn write_outputs(metadata: &ProjectMetadata) -> anyhow::Result<()> {
    let formatted = format_outputs(&step_outputs(metadata));

    match std::env::var_os("GITHUB_OUTPUT") {
        Some(path) if !path.is_empty() => append_to_file(Path::new(&path), &formatted),
        _ => {
            print!("{formatted}");
            Ok(())
        }
    }
}

fn append_to_file(path: &Path, formatted: &str) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    file.write_all(formatted.as_bytes())
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    Ok(())
}

/// Reports a failed run through the runner's `::error::` workflow command.
pub fn set_failed(err: &anyhow::Error) {
    println!("::error::{}", escape_data(&format!("{err:#}")));
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
