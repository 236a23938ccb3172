//! Expands a bookmark token into a filesystem path

use crate::core::error::{Error, Result};
use crate::core::store::BookmarkStore;

/// Resolve a token of the form `name`, `name/sub/path`, or `/absolute/path`
///
/// A bare name resolves to the bookmark's path. A name followed by a
/// subpath resolves to the bookmark's path with the `/`-led remainder
/// appended verbatim. A token starting with `/` is already a path and is
/// returned unchanged with no lookup. No normalization of `..` or doubled
/// slashes is performed, and the result is not checked for existence.
pub fn expand(store: &BookmarkStore, token: &str) -> Result<String> {
    match token.find('/') {
        // the whole token is a bookmark name
        None => store
            .find(token)
            .map(|b| b.path.clone())
            .ok_or(Error::BookmarkNotFound),
        // already an absolute path, no bookmark involved
        Some(0) => Ok(token.to_string()),
        // a bookmark name followed by a subpath
        Some(idx) => {
            let (name, subpath) = token.split_at(idx);
            let bookmark = store.find(name).ok_or(Error::BookmarkNotFound)?;
            Ok(format!("{}{}", bookmark.path, subpath))
        }
    }
}
