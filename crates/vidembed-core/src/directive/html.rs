//! Markup for a directive's element, ready to drop into a display region.

use super::{Element, RenderDirective};

/// Renders the directive's element as an HTML fragment. Only attributes the
/// directive sets are emitted; every value is attribute-escaped.
pub fn render_html(directive: &RenderDirective) -> String {
    render_element(directive, None)
}

/// Like [`render_html`], with an optional `onerror` handler on the element.
pub(super) fn render_element(directive: &RenderDirective, onerror: Option<&str>) -> String {
    let onerror = onerror
        .map(|js| format!(" onerror=\"{}\"", escape_attr(js)))
        .unwrap_or_default();
    match &directive.element {
        Element::Frame(frame) => {
            let mut out = format!("<iframe src=\"{}\"", escape_attr(&frame.src));
            if let Some(allow) = &frame.allow {
                out.push_str(&format!(" allow=\"{}\"", escape_attr(allow)));
            }
            if let Some(sandbox) = &frame.sandbox {
                out.push_str(&format!(" sandbox=\"{}\"", escape_attr(sandbox)));
            }
            if frame.allow_fullscreen {
                out.push_str(" allowfullscreen");
            }
            out.push_str(&onerror);
            out.push_str("></iframe>");
            out
        }
        Element::Video(video) => {
            let mut out = format!("<video src=\"{}\"", escape_attr(&video.src));
            if video.controls {
                out.push_str(" controls");
            }
            out.push_str(&format!(
                " crossorigin=\"{}\"{onerror}></video>",
                video.cross_origin.as_attr()
            ));
            out
        }
    }
}

/// Escapes text for use inside a double- or single-quoted attribute value
/// (also safe as element text).
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Classification;

    #[test]
    fn youtube_iframe() {
        let d = RenderDirective::from(Classification::YouTube {
            video_id: "abc123".into(),
        });
        assert_eq!(
            render_html(&d),
            "<iframe src=\"https://www.youtube.com/embed/abc123?rel=0\" \
             allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; \
             picture-in-picture\" \
             allowfullscreen></iframe>"
        );
    }

    #[test]
    fn generic_iframe_has_sandbox_and_escaped_src() {
        let d = RenderDirective::from(Classification::Generic {
            url: "https://example.com/?a=1&b=\"2\"".into(),
        });
        let html = render_html(&d);
        assert!(html.starts_with(
            "<iframe src=\"https://example.com/?a=1&amp;b=&quot;2&quot;\""
        ));
        assert!(html.contains(
            " sandbox=\"allow-scripts allow-same-origin allow-forms allow-popups\""
        ));
        assert!(!html.contains(" allow=\""));
    }

    #[test]
    fn video_element() {
        let d = RenderDirective::from(Classification::DirectFile {
            url: "https://example.com/movie.mp4?token=x".into(),
        });
        assert_eq!(
            render_html(&d),
            "<video src=\"https://example.com/movie.mp4?token=x\" \
             controls crossorigin=\"anonymous\"></video>"
        );
    }

    #[test]
    fn fragment_has_no_handlers() {
        let d = RenderDirective::from(Classification::Generic {
            url: "https://example.com/".into(),
        });
        assert!(!render_html(&d).contains("onerror"));
    }

    #[test]
    fn element_with_onerror_escapes_handler() {
        let d = RenderDirective::from(Classification::DirectFile {
            url: "https://example.com/a.ogg".into(),
        });
        let html = render_element(&d, Some("show('x')"));
        assert!(html.ends_with(
            " crossorigin=\"anonymous\" onerror=\"show(&#39;x&#39;)\"></video>"
        ));
    }

    #[test]
    fn escape_all_specials() {
        assert_eq!(
            escape_attr("<a href='x'>&\""),
            "&lt;a href=&#39;x&#39;&gt;&amp;&quot;"
        );
        assert_eq!(escape_attr("plain"), "plain");
    }
}
