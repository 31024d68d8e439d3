//! Body rendering
//!
//! Essays use a deliberately small markup surface: level-2 and level-3
//! headings, bold emphasis, and blank-line paragraph breaks. Anything else
//! passes through literally.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref H3_RE: Regex = Regex::new(r"(?m)^### (.*)$").unwrap();
    static ref H2_RE: Regex = Regex::new(r"(?m)^## (.*)$").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref PARA_RE: Regex = Regex::new(r"\n\n+").unwrap();
}

/// Render an essay body to display markup.
///
/// Substitutions are applied in a fixed order: h3 headings, h2 headings,
/// bold spans, then blank-line-separated blocks become paragraphs.
pub fn render_body(body: &str) -> String {
    let body = body.replace("\r\n", "\n");
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }

    let body = H3_RE.replace_all(body, "<h3>$1</h3>");
    let body = H2_RE.replace_all(&body, "<h2>$1</h2>");
    let body = BOLD_RE.replace_all(&body, "<strong>$1</strong>");
    let body = PARA_RE.replace_all(&body, "</p><p>");

    format!("<p>{}</p>", body)
}
