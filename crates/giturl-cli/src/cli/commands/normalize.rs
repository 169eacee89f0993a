//! `giturl normalize <source>...` – print canonical web URLs.

use anyhow::Result;
use giturl_core::normalize;
use std::io::{self, Write};

pub fn run_normalize(sources: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    for source in sources {
        writeln!(out, "{}", normalize(source))?;
    }
    Ok(())
}
