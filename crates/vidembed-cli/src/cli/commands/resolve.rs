//! `vidembed resolve <url>` – print the directive for a single input.

use anyhow::Result;
use vidembed_core::config::OutputFormat;
use vidembed_core::Resolver;

use crate::cli::output::format_directive;

pub fn run_resolve(resolver: &Resolver, url: &str, format: OutputFormat) -> Result<()> {
    let directive = resolver.resolve(url)?;
    println!("{}", format_directive(&directive, format)?);
    Ok(())
}
