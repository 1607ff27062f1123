//! Render directives: which element the display region must build, with
//! which attributes, and which messages go with it.

mod html;
mod page;

pub use html::{escape_attr, render_html};
pub use page::{render_page, render_rejection_page};

use crate::resolver::Classification;
use serde::Serialize;

/// Permissions granted to the YouTube player frame.
pub const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
/// Permissions granted to the Vimeo player frame.
pub const VIMEO_ALLOW: &str = "autoplay; fullscreen; picture-in-picture";
/// Sandbox tokens for frames pointed at unrecognized sites. Nothing broader
/// (no top navigation, no downloads) is ever granted.
pub const GENERIC_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

pub const VIDEO_LOAD_ERROR: &str =
    "Could not load the video file. It may block cross-origin requests or be an unsupported format.";
pub const FRAME_LOAD_ERROR: &str =
    "Embedding failed: the site may disallow embedding (X-Frame-Options) or block cross-origin requests.";
pub const GENERIC_NOTICE: &str = "Loaded via iframe (may be blocked by some sites).";

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIMEO_PLAYER_BASE: &str = "https://player.vimeo.com/video/";

/// A frame (`<iframe>`) element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub src: String,
    pub allow_fullscreen: bool,
    /// Permissions policy (`allow` attribute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<String>,
    /// Sandbox tokens; `None` means the frame is not sandboxed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<String>,
}

/// A native video (`<video>`) element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub src: String,
    pub controls: bool,
    pub cross_origin: CrossOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOrigin {
    Anonymous,
}

impl CrossOrigin {
    pub fn as_attr(self) -> &'static str {
        match self {
            CrossOrigin::Anonymous => "anonymous",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Frame(Frame),
    Video(Video),
}

/// Everything the display region needs to show one resolved input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderDirective {
    pub classification: Classification,
    pub element: Element,
    /// Success-styled message shown immediately. `None` clears the message area.
    pub notice: Option<String>,
    /// Error-styled message to show if the element later fails to load.
    /// Cross-origin frame failures are often silent, so this may never fire.
    pub on_load_error: Option<String>,
}

impl RenderDirective {
    pub fn from_classification(classification: Classification) -> Self {
        let (element, notice, on_load_error) = match &classification {
            Classification::YouTube { video_id } => (
                Element::Frame(Frame {
                    src: format!(
                        "{YOUTUBE_EMBED_BASE}{}?rel=0",
                        urlencoding::encode(video_id)
                    ),
                    allow_fullscreen: true,
                    allow: Some(YOUTUBE_ALLOW.to_string()),
                    sandbox: None,
                }),
                None,
                None,
            ),
            Classification::Vimeo { video_id } => (
                Element::Frame(Frame {
                    src: format!("{VIMEO_PLAYER_BASE}{}", urlencoding::encode(video_id)),
                    allow_fullscreen: true,
                    allow: Some(VIMEO_ALLOW.to_string()),
                    sandbox: None,
                }),
                None,
                None,
            ),
            Classification::DirectFile { url } => (
                Element::Video(Video {
                    src: url.clone(),
                    controls: true,
                    cross_origin: CrossOrigin::Anonymous,
                }),
                None,
                Some(VIDEO_LOAD_ERROR.to_string()),
            ),
            Classification::Generic { url } => (
                Element::Frame(Frame {
                    src: url.clone(),
                    allow_fullscreen: true,
                    allow: None,
                    sandbox: Some(GENERIC_SANDBOX.to_string()),
                }),
                Some(GENERIC_NOTICE.to_string()),
                Some(FRAME_LOAD_ERROR.to_string()),
            ),
        };
        Self {
            classification,
            element,
            notice,
            on_load_error,
        }
    }

    /// The URL the constructed element will load.
    pub fn src(&self) -> &str {
        match &self.element {
            Element::Frame(f) => &f.src,
            Element::Video(v) => &v.src,
        }
    }
}

impl From<Classification> for RenderDirective {
    fn from(classification: Classification) -> Self {
        Self::from_classification(classification)
    }
}
