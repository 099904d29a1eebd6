//! Cookie-string parsing with `decodeURIComponent` semantics.

use percent_encoding::percent_decode_str;

/// Finds `name` in a `document.cookie`-style string and returns its
/// percent-decoded value. Entries are `;`-separated and matched on an
/// exact `name=` prefix after trimming.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    for entry in header.split(';') {
        let entry = entry.trim();
        if let Some(value) = entry.strip_prefix(name).and_then(|r| r.strip_prefix('=')) {
            return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }
    None
}

/// Reads a cookie from the live document. `None` when the document is
/// unavailable or the cookie is not set.
#[cfg(target_arch = "wasm32")]
pub fn get(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let doc = crate::document().ok()?;
    let html_doc = doc.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let header = html_doc.cookie().ok()?;
    find_cookie(&header, name)
}

#[cfg(test)]
mod tests {
    use super::find_cookie;

    #[test]
    fn finds_token_among_entries() {
        let header = "sessionid=abc123; csrftoken=tok-42; theme=dark";
        assert_eq!(find_cookie(header, "csrftoken").as_deref(), Some("tok-42"));
    }

    #[test]
    fn name_must_match_exactly() {
        let header = "csrftoken2=wrong; xcsrftoken=alsowrong";
        assert_eq!(find_cookie(header, "csrftoken"), None);
    }

    #[test]
    fn percent_decodes_value() {
        let header = "csrftoken=a%2Bb%3D%3D";
        assert_eq!(find_cookie(header, "csrftoken").as_deref(), Some("a+b=="));
    }

    #[test]
    fn empty_header_has_no_cookies() {
        assert_eq!(find_cookie("", "csrftoken"), None);
    }

    #[test]
    fn trims_padding_around_entries() {
        let header = "  csrftoken=x ; y=z";
        assert_eq!(find_cookie(header, "csrftoken").as_deref(), Some("x"));
    }
}
