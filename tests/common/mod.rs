//! Helpers for inspecting rendered HTML.

#![allow(dead_code)]

/// Removes HTML comments, including the `<!>` markers Leptos emits.
pub fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<!") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = if tail.starts_with("<!--") {
            tail.find("-->").map(|i| i + 3)
        } else {
            tail.find('>').map(|i| i + 1)
        };
        match end {
            Some(end) => rest = &tail[end..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Returns the markup between `open` and the next `</div>`.
pub fn div_content<'a>(html: &'a str, open: &str) -> &'a str {
    let start = html.find(open).expect("opening tag present") + open.len();
    let len = html[start..].find("</div>").expect("closing tag present");
    &html[start..start + len]
}

/// Extracts the `href` of the anchor whose label is `label`.
pub fn href_of(html: &str, label: &str) -> String {
    let label_at = html.find(label).expect("label present");
    let href_at = html[..label_at].rfind("href=\"").expect("href present") + 6;
    let len = html[href_at..].find('"').expect("href terminated");
    html[href_at..href_at + len].to_string()
}
