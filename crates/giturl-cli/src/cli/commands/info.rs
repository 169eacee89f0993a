//! `giturl info <source>...` – print repository coordinates.

use anyhow::{bail, Result};
use giturl_core::config::OutputFormat;
use giturl_core::{try_extract, RepoInfo};
use std::io::{self, Write};

/// Placeholder for the branch column in text output.
const NO_BRANCH: &str = "-";

/// Print coordinates for every source; fails after the loop if any source had none.
pub fn run_info(sources: &[String], format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut failed = 0usize;

    for source in sources {
        match try_extract(source) {
            Ok(info) => writeln!(out, "{}", render(&info, format)?)?,
            Err(e) => {
                tracing::debug!(source = %source, error = %e, "no coordinates");
                eprintln!("giturl: {source}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} sources had no repository coordinates",
            failed,
            sources.len()
        );
    }
    Ok(())
}

pub(crate) fn render(info: &RepoInfo, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "{}\t{}\t{}\t{}",
            info.host,
            info.owner,
            info.name,
            info.branch.as_deref().unwrap_or(NO_BRANCH)
        ),
        OutputFormat::Json => serde_json::to_string(info)?,
    })
}
