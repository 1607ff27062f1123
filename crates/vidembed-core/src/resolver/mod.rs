//! URL recognition: validate untrusted input, then classify it.
//!
//! Classifiers run in a fixed priority order (YouTube, Vimeo, direct file,
//! generic) and the first match wins, so `https://vimeo.com/clip.mp4` is a
//! Vimeo video rather than a direct file.

mod direct;
mod validate;
mod vimeo;
mod youtube;

pub use direct::{is_direct_video_file, normalize_extension, DEFAULT_VIDEO_EXTENSIONS};
pub use validate::{validate, ValidatedUrl};
pub use vimeo::extract_vimeo_id;
pub use youtube::extract_youtube_id;

use crate::config::VidembedConfig;
use crate::directive::RenderDirective;
use crate::error::ResolveError;
use serde::Serialize;

/// What a validated URL was recognized as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    #[serde(rename = "youtube")]
    YouTube { video_id: String },
    Vimeo { video_id: String },
    DirectFile { url: String },
    Generic { url: String },
}

impl Classification {
    /// Short label used in logs and text output.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::YouTube { .. } => "youtube",
            Classification::Vimeo { .. } => "vimeo",
            Classification::DirectFile { .. } => "direct-file",
            Classification::Generic { .. } => "generic",
        }
    }
}

/// Stateless resolver; holds only the direct-file extension list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    video_extensions: Vec<String>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl Resolver {
    /// Builds a resolver recognizing the given direct-file extensions.
    /// Blank entries are dropped; an empty list disables direct-file matching.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let video_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self { video_extensions }
    }

    pub fn from_config(cfg: &VidembedConfig) -> Self {
        Self::with_extensions(&cfg.direct_video_extensions)
    }

    pub fn video_extensions(&self) -> &[String] {
        &self.video_extensions
    }

    /// Validates `raw` and classifies it. Only validation can fail.
    pub fn classify(&self, raw: &str) -> Result<Classification, ResolveError> {
        let validated = validate(raw).map_err(|e| {
            tracing::debug!("rejected input: {}", e.detail());
            e
        })?;
        let classification = self.classify_validated(&validated);
        tracing::debug!(
            "classified {} as {}",
            validated.as_str(),
            classification.label()
        );
        Ok(classification)
    }

    /// Classifies an already-validated URL. Total: always yields a variant.
    pub fn classify_validated(&self, validated: &ValidatedUrl) -> Classification {
        let url = validated.as_url();
        if let Some(video_id) = extract_youtube_id(url) {
            return Classification::YouTube { video_id };
        }
        if let Some(video_id) = extract_vimeo_id(url) {
            return Classification::Vimeo { video_id };
        }
        if is_direct_video_file(url, &self.video_extensions) {
            return Classification::DirectFile {
                url: validated.as_str().to_string(),
            };
        }
        Classification::Generic {
            url: validated.as_str().to_string(),
        }
    }

    /// Single entry point: raw input to render directive, or the rejection.
    pub fn resolve(&self, raw: &str) -> Result<RenderDirective, ResolveError> {
        self.classify(raw).map(RenderDirective::from)
    }
}

/// [`Resolver::resolve`] with the default extension list.
pub fn resolve(raw: &str) -> Result<RenderDirective, ResolveError> {
    Resolver::default().resolve(raw)
}
