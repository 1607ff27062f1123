//! `vidembed page <url>` – standalone HTML page with the player.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vidembed_core::{render_page, render_rejection_page, Resolver};

/// Writes the page to `output` (or stdout). A rejected URL still produces a
/// page showing the reason, and the command then fails with that reason.
pub fn run_page(resolver: &Resolver, url: &str, output: Option<&Path>) -> Result<()> {
    let outcome = resolver.resolve(url);
    let html = match &outcome {
        Ok(directive) => render_page(directive),
        Err(err) => render_rejection_page(err),
    };

    match output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("write {}", path.display()))?;
            tracing::info!("wrote page for {} to {}", url, path.display());
        }
        None => print!("{html}"),
    }

    outcome?;
    Ok(())
}
