//! Text normalization applied to located string fields.

/// Prefix `https://` unless the URL already starts with an http(s) scheme.
pub fn ensure_url_scheme(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize_sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
