//! Standalone HTML page: the rendered element plus its message line.

use super::html::render_element;
use super::{escape_attr, RenderDirective};
use crate::error::ResolveError;

const SUCCESS_COLOR: &str = "#baf7ff";
const ERROR_COLOR: &str = "#ffb4b4";

/// Element id of the load-failure advisory line.
const LOAD_ERROR_ID: &str = "load-error";
/// Reveals the advisory line when the player element fires `error`.
const REVEAL_LOAD_ERROR: &str = "document.getElementById('load-error').hidden=false";

/// A page showing the directive's element and its notice (success style).
///
/// The load-failure advisory, when present, starts hidden and is revealed by
/// the element's `onerror`. Cross-origin frame failures often never fire
/// that event, in which case the advisory stays hidden.
pub fn render_page(directive: &RenderDirective) -> String {
    let onerror = directive.on_load_error.as_ref().map(|_| REVEAL_LOAD_ERROR);
    let mut body = format!(
        "<div id=\"player\">{}</div>\n",
        render_element(directive, onerror)
    );
    body.push_str(&message_line(
        directive.notice.as_deref().unwrap_or(""),
        false,
        None,
    ));
    if let Some(advisory) = &directive.on_load_error {
        body.push_str(&message_line(advisory, true, Some(LOAD_ERROR_ID)));
    }
    layout(directive.src(), &body)
}

/// A page with an empty player and the rejection reason in error style.
pub fn render_rejection_page(err: &ResolveError) -> String {
    let mut body = String::from("<div id=\"player\"></div>\n");
    body.push_str(&message_line(err.reason(), true, None));
    layout("rejected", &body)
}

/// One message line; with `hidden_id` the line carries that id and starts hidden.
fn message_line(text: &str, is_error: bool, hidden_id: Option<&str>) -> String {
    let class = if is_error { "message error" } else { "message ok" };
    let extra = hidden_id
        .map(|id| format!(" id=\"{id}\" hidden"))
        .unwrap_or_default();
    format!("<p class=\"{class}\"{extra}>{}</p>\n", escape_attr(text))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>vidembed: {title}</title>\n\
         <style>\n\
         body {{ background: #101418; color: #e6e6e6; font-family: sans-serif; }}\n\
         #player iframe, #player video {{ width: 100%; aspect-ratio: 16 / 9; border: 0; }}\n\
         .message.ok {{ color: {SUCCESS_COLOR}; }}\n\
         .message.error {{ color: {ERROR_COLOR}; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape_attr(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{FRAME_LOAD_ERROR, GENERIC_NOTICE, VIDEO_LOAD_ERROR};
    use crate::resolver::Classification;

    fn hidden_advisory(text: &str) -> String {
        format!("<p class=\"message error\" id=\"load-error\" hidden>{text}</p>")
    }

    #[test]
    fn generic_page_shows_notice_and_hides_advisory() {
        let d = RenderDirective::from(Classification::Generic {
            url: "https://example.com/some/page".into(),
        });
        let page = render_page(&d);
        assert!(page.contains("<div id=\"player\"><iframe src=\"https://example.com/some/page\""));
        assert!(page.contains(&format!(
            "<p class=\"message ok\">{}</p>",
            escape_attr(GENERIC_NOTICE)
        )));
        assert!(page.contains(&hidden_advisory(FRAME_LOAD_ERROR)));
        assert!(!page.contains(&format!("<p class=\"message error\">{FRAME_LOAD_ERROR}")));
        assert!(page.contains("<title>vidembed: https://example.com/some/page</title>"));
    }

    #[test]
    fn direct_file_advisory_is_revealed_only_by_onerror() {
        let d = RenderDirective::from(Classification::DirectFile {
            url: "https://example.com/movie.mp4".into(),
        });
        let page = render_page(&d);
        assert!(page.contains(&hidden_advisory(VIDEO_LOAD_ERROR)));
        assert!(page.contains(
            " crossorigin=\"anonymous\" \
             onerror=\"document.getElementById(&#39;load-error&#39;).hidden=false\"></video>"
        ));
        assert!(!page.contains(&format!("<p class=\"message error\">{VIDEO_LOAD_ERROR}")));
    }

    #[test]
    fn youtube_page_has_empty_success_line() {
        let d = RenderDirective::from(Classification::YouTube {
            video_id: "abc123".into(),
        });
        let page = render_page(&d);
        assert!(page.contains("<p class=\"message ok\"></p>"));
        assert!(!page.contains("message error"));
        assert!(!page.contains("onerror"));
    }

    #[test]
    fn rejection_page() {
        let err = crate::resolver::validate("javascript:alert(1)").unwrap_err();
        let page = render_rejection_page(&err);
        assert!(page.contains("<div id=\"player\"></div>"));
        assert!(page.contains("<p class=\"message error\">not a safe http(s) URL</p>"));
    }
}
