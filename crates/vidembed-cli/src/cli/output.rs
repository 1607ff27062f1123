//! Printing directives in the selected output format.

use anyhow::Result;
use vidembed_core::config::OutputFormat;
use vidembed_core::{render_html, Element, RenderDirective};

pub fn format_directive(directive: &RenderDirective, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_text(directive),
        OutputFormat::Json => serde_json::to_string_pretty(directive)?,
        OutputFormat::Html => render_html(directive),
    })
}

fn format_text(directive: &RenderDirective) -> String {
    let mut lines = vec![format!(
        "{}: {}",
        directive.classification.label(),
        directive.src()
    )];
    match &directive.element {
        Element::Frame(frame) => {
            lines.push("  element: iframe".to_string());
            if let Some(allow) = &frame.allow {
                lines.push(format!("  allow: {allow}"));
            }
            if let Some(sandbox) = &frame.sandbox {
                lines.push(format!("  sandbox: {sandbox}"));
            }
            if frame.allow_fullscreen {
                lines.push("  allowfullscreen".to_string());
            }
        }
        Element::Video(video) => {
            lines.push("  element: video".to_string());
            if video.controls {
                lines.push("  controls".to_string());
            }
            lines.push(format!("  crossorigin: {}", video.cross_origin.as_attr()));
        }
    }
    if let Some(notice) = &directive.notice {
        lines.push(format!("  notice: {notice}"));
    }
    if let Some(advisory) = &directive.on_load_error {
        lines.push(format!("  on load error: {advisory}"));
    }
    lines.join("\n")
}
