//! Dotted key-path lookups over a parsed JSON tree.
//!
//! A path such as `response.content.mimeType` is split on `.` and resolved by
//! successive exact key lookups. Only objects are descended; arrays are never
//! indexed and there are no wildcards. When an object repeats a name, the
//! first member with that name is the one followed.

use crate::tree::JsonNode;

/// Resolves `path` against `root`, returning the node reached by descending one
/// object key per segment.
///
/// Returns `None` as soon as the current node is not an object or lacks the
/// segment's key. Empty segments (`a..b`, a leading or trailing dot) are looked
/// up as the literal empty-string key.
pub fn resolve<'a>(root: &'a JsonNode, path: &str) -> Option<&'a JsonNode> {
    path.split('.').try_fold(root, |node, segment| node.get(segment))
}

/// Resolves `path` and returns it only if it is a string node.
pub fn resolve_str<'a>(root: &'a JsonNode, path: &str) -> Option<&'a str> {
    resolve(root, path)?.as_str()
}

/// Resolves `path` as a base-10 integer.
///
/// Accepts integer-valued number nodes and strings holding nothing but an
/// optionally signed integer. Fractions, exponents, trailing characters and
/// out-of-range values are rejected.
pub fn resolve_i64(root: &JsonNode, path: &str) -> Option<i64> {
    match resolve(root, path)? {
        JsonNode::Number(n) => n.as_i64(),
        JsonNode::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}
