//! CSRF token lookup.
//!
//! Django pages expose the token in up to three places: the hidden
//! `csrfmiddlewaretoken` form field, a `<meta name="csrf-token">` tag and
//! the `csrftoken` cookie. They are consulted in that order.

/// Raw token candidates read from the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsrfSources {
    pub hidden_field: Option<String>,
    pub meta_tag: Option<String>,
    /// Whole `document.cookie` string
    pub cookies: Option<String>,
}

/// Returns the first non-empty token. The cookie is only consulted when
/// `cookie_name` is set.
pub fn resolve_token(sources: &CsrfSources, cookie_name: Option<&str>) -> Option<String> {
    let from_cookie = || {
        let name = cookie_name?;
        cookie_value(sources.cookies.as_deref()?, name)
    };

    non_empty(sources.hidden_field.as_deref())
        .or_else(|| non_empty(sources.meta_tag.as_deref()))
        .or_else(|| from_cookie().filter(|v| !v.is_empty()))
}

/// Extracts and URL-decodes one cookie from a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        )
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
