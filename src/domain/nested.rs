//! Nested JSON document traversal.

use serde_json::Value;

use super::error::{LookupError, LookupResult};

/// Walk `root` along `path` and return the value at the end of the path.
///
/// Each step expects the current value to be a JSON object containing the
/// next key. The error carries exactly the first key that cannot be found;
/// descending into a non-object value fails with that same key. An empty
/// path returns `root` itself.
///
/// Pure and allocation-free on the success path; the result borrows from
/// `root`.
///
/// # Example
///
/// ```
/// use cachette::access_nested;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 2}});
/// assert_eq!(access_nested(&doc, &["a", "b"]).unwrap(), &json!(2));
/// ```
pub fn access_nested<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> LookupResult<&'a Value> {
    let mut current = root;
    for key in path {
        let key = key.as_ref();
        current = current
            .as_object()
            .and_then(|map| map.get(key))
            .ok_or_else(|| LookupError::KeyNotFound(key.to_string()))?;
    }
    Ok(current)
}
