//! `vidembed watch` – paste-and-play loop over stdin.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use vidembed_core::config::OutputFormat;
use vidembed_core::Resolver;

use crate::cli::output::format_directive;
use crate::cli::stage::{Message, Stage};

pub fn run_watch(resolver: &Resolver, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    watch_lines(resolver, format, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Resolves each non-blank trimmed line and shows it on a fresh stage slot.
/// Rejections are reported and the loop keeps going.
pub(crate) fn watch_lines<R: BufRead, W: Write>(
    resolver: &Resolver,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<Stage> {
    let mut stage = Stage::default();
    for line in input.lines() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        stage.show(resolver.resolve(raw));
        if let Some(directive) = stage.current() {
            writeln!(out, "{}", format_directive(directive, format)?)?;
        }
        match stage.message() {
            Some(Message::Ok(notice)) if !notice.is_empty() => writeln!(out, "ok: {notice}")?,
            Some(Message::Error(reason)) => writeln!(out, "error: {reason}")?,
            _ => {}
        }
        out.flush()?;
    }
    Ok(stage)
}
