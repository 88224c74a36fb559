//! Ordered language map and comment-key handling.
//!
//! A language map is a flat JSON object. Iteration order always matches the
//! file order, which `serde_json` guarantees through its `preserve_order`
//! feature.

use serde_json::{Map, Value};

/// Substring that marks a key as non-translatable metadata.
pub const COMMENT_MARKER: &str = "__comment";

/// Flat, insertion-ordered mapping from key to JSON value.
pub type LangMap = Map<String, Value>;

/// Returns true if the key carries metadata rather than a translation.
pub fn is_comment_key(key: &str) -> bool {
    key.contains(COMMENT_MARKER)
}

/// Split a map into its comment entries and its regular entries.
///
/// Both halves keep the original relative order.
pub fn partition(map: &LangMap) -> (LangMap, LangMap) {
    let mut comments = LangMap::new();
    let mut regular = LangMap::new();
    for (key, value) in map {
        if is_comment_key(key) {
            comments.insert(key.clone(), value.clone());
        } else {
            regular.insert(key.clone(), value.clone());
        }
    }
    (comments, regular)
}
