//! vidembed: turn a pasted URL into an inline video player description.
//!
//! Input is validated (http/https only), classified as YouTube, Vimeo, a
//! direct video file, or a generic page, and mapped to a [`RenderDirective`]
//! naming the element to build and its attributes. Everything here is pure
//! and synchronous; the caller owns whatever is currently displayed.

pub mod config;
pub mod directive;
pub mod error;
pub mod logging;
pub mod resolver;

pub use directive::{render_html, render_page, render_rejection_page, Element, RenderDirective};
pub use error::ResolveError;
pub use resolver::{resolve, Classification, Resolver, ValidatedUrl};
