//! HTML rendering for the verdict page.

use super::types::PageView;
use crate::utils::sanitize::escape_html;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Phishing Website Detection</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }
    input[type=text] { width: 100%; padding: .5rem; box-sizing: border-box; }
    .result { margin-top: 2rem; padding: 1rem; border-radius: .5rem; background: #eef7ee; }
    .result.phishing { background: #fbeaea; }
    .error { color: #a00; }
  </style>
</head>
<body>
  <h1>Phishing Website Detection</h1>
  <form id="urlForm" method="post" action="/predict">
    <label for="url">Website URL</label>
    <input type="text" id="url" name="url" placeholder="https://example.com" required>
    <button type="submit">Check</button>
  </form>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Renders the full page for a view.
pub fn render_page(view: &PageView) -> String {
    let mut html = String::from(PAGE_HEAD);
    match view {
        PageView::Blank => {}
        PageView::InputError(message) => {
            html.push_str(&format!(
                "  <p class=\"error\">{}</p>\n",
                escape_html(message)
            ));
        }
        PageView::Verdict {
            url,
            label,
            phishing,
            reasons,
        } => {
            let class = if *phishing { "result phishing" } else { "result" };
            html.push_str(&format!("  <div class=\"{}\">\n", class));
            html.push_str(&format!("    <h2>{}</h2>\n", escape_html(label)));
            html.push_str(&format!(
                "    <p id=\"urlDisplay\">Checked URL: <span id=\"displayedUrl\">{}</span></p>\n",
                escape_html(url)
            ));
            if !reasons.is_empty() {
                html.push_str("    <h3>Why?</h3>\n    <ul id=\"reasonList\">\n");
                for reason in reasons {
                    html.push_str(&format!("      <li>{}</li>\n", escape_html(reason)));
                }
                html.push_str("    </ul>\n");
            }
            html.push_str("  </div>\n");
        }
    }
    html.push_str(PAGE_TAIL);
    html
}
