//! Shop page location and its `search` query parameter.

use std::fmt;

/// Path of the shop page.
pub const SHOP_PATH: &str = "/shop";

/// A navigation target on the shop page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopLocation {
    /// Decoded `search` parameter, if present and non-empty.
    pub search: Option<String>,
}

impl ShopLocation {
    /// The plain shop page.
    pub fn shop() -> Self {
        Self::default()
    }

    /// The shop page showing results for `term`.
    pub fn for_search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }

    /// Parse the query part of a URL, with or without the leading `?`.
    ///
    /// Only `search` is recognized. An empty value counts as absent.
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut location = Self::default();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");

            if key == "search" {
                let decoded = url_decode(value);
                location.search = (!decoded.is_empty()).then_some(decoded);
            }
        }

        location
    }

    /// Parse a full path such as `/shop?search=rose%20gold`.
    pub fn from_path(path: &str) -> Self {
        match path.split_once('?') {
            Some((_, qs)) => Self::from_query_string(qs),
            None => Self::default(),
        }
    }
}

impl fmt::Display for ShopLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.search {
            Some(term) => write!(f, "{}?search={}", SHOP_PATH, url_encode(term)),
            None => f.write_str(SHOP_PATH),
        }
    }
}

/// Percent-encode everything outside the unreserved set, spaces as `%20`.
pub fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes are kept as-is.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                out.push((hex_value(bytes[i + 1]) << 4) | hex_value(bytes[i + 2]));
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
