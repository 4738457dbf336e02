// Cookie string helpers shared by the storage backends and preferences

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Split a `document.cookie` string into `(name, value)` pairs.
///
/// A pair without `=` yields `None` for the value. Empty names are skipped.
pub fn parse_cookies(raw: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    raw.split(';').filter_map(|pair| {
        let pair = pair.trim();
        let (name, value) = match pair.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (pair, None),
        };
        if name.is_empty() { None } else { Some((name, value)) }
    })
}

pub fn site_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

pub fn expired_cookie(name: &str) -> String {
    format!("{name}=;expires={EPOCH}; path=/")
}

pub fn is_expired_cookie(attributes: &str) -> bool {
    attributes.split(';').any(|attr| {
        attr.trim()
            .split_once('=')
            .map_or(false, |(k, v)| k.eq_ignore_ascii_case("expires") && v.trim() == EPOCH)
    })
}
