/// Script URLs containing this marker are injected in the document head on
/// preview, since the Tailwind browser build restyles the page after load
/// and causes a flash of unstyled content when deferred.
pub const HEAD_SCRIPT_MARKER: &str = "tailwindcss";

pub fn is_head_script(url: &str) -> bool {
    url.contains(HEAD_SCRIPT_MARKER)
}

/// Strip top-level document wrapper tags from a serialized fragment.
/// Components are embeddable fragments; the editor occasionally serializes
/// them as full documents, so doctype, html, head and body wrappers are
/// removed before persisting. Anything inside the body is kept as-is.
pub fn strip_page_wrapper(html: &str) -> String {
    let mut out = html.trim().to_string();
    out = strip_leading_tag(&out, "!doctype");
    out = strip_enclosing_tag(&out, "html");
    out = remove_section(&out, "head");
    out = strip_enclosing_tag(&out, "body");
    out.trim().to_string()
}

fn tag_starts_at(lower: &str, pos: usize, name: &str) -> bool {
    let open = format!("<{}", name);
    if !lower[pos..].starts_with(&open) {
        return false;
    }
    // Reject prefixes of longer tag names, e.g. "<head" matching "<header".
    matches!(lower[pos + open.len()..].chars().next(), Some('>') | Some(' ') | Some('\t') | Some('\n') | Some('\r'))
}

fn strip_leading_tag(html: &str, name: &str) -> String {
    let trimmed = html.trim_start();
    let lower = trimmed.to_ascii_lowercase();
    if tag_starts_at(&lower, 0, name) {
        if let Some(end) = trimmed.find('>') {
            return trimmed[end + 1..].to_string();
        }
    }
    html.to_string()
}

fn strip_enclosing_tag(html: &str, name: &str) -> String {
    let trimmed = html.trim();
    let lower = trimmed.to_ascii_lowercase();
    if !tag_starts_at(&lower, 0, name) {
        return trimmed.to_string();
    }
    let Some(open_end) = trimmed.find('>') else {
        return trimmed.to_string();
    };
    let mut inner = &trimmed[open_end + 1..];
    let close = format!("</{}>", name);
    if inner.to_ascii_lowercase().trim_end().ends_with(&close) {
        let end = inner.to_ascii_lowercase().rfind(&close).unwrap_or(inner.len());
        inner = &inner[..end];
    }
    inner.trim().to_string()
}

fn remove_section(html: &str, name: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", name);
    let close = format!("</{}>", name);

    let Some(start) = lower.find(&open).filter(|&pos| tag_starts_at(&lower, pos, name)) else {
        return html.to_string();
    };
    let Some(close_start) = lower[start..].find(&close).map(|off| start + off) else {
        return html.to_string();
    };
    let section_end = close_start + close.len();

    let mut out = String::with_capacity(html.len());
    out.push_str(&html[..start]);
    out.push_str(&html[section_end..]);
    out
}
