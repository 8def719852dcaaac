//! Tab identity resolution.

use crate::route::RouteTarget;
use percent_encoding::percent_decode_str;

/// Query parameter that pins a tab to an explicit key
pub const PAGE_KEY_PARAM: &str = "pageKey";

/// Resolve the deduplication key for a navigational target.
///
/// Precedence: a non-empty `pageKey` query value, then the bare path when
/// `meta.full_path_key` is `Some(false)`, then the full path (falling back to
/// the path). The result is percent-decoded; a malformed escape or invalid
/// UTF-8 leaves the raw key untouched.
pub fn resolve_tab_key(target: &RouteTarget) -> String {
    let page_key = target
        .query
        .get(PAGE_KEY_PARAM)
        .and_then(|value| value.first())
        .filter(|value| !value.is_empty());

    let raw_key = match page_key {
        Some(page_key) => page_key,
        None if target.meta.full_path_key == Some(false) => target.path.as_str(),
        None => target.full_path_or_path(),
    };

    decode_key(raw_key)
}

/// Percent-decode a raw key, returning it unchanged if it does not decode
pub fn decode_key(raw: &str) -> String {
    if has_malformed_escape(raw) {
        return raw.to_string();
    }
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}
