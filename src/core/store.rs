//! The bookmark store: an ordered name → path collection backed by a flat file

use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::{Error, Result};

/// A named pointer to a directory path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Short identifier, unique within the store
    pub name: String,
    /// Absolute directory path; never validated for existence
    pub path: String,
}

/// Insertion-ordered collection of bookmarks for one invocation
///
/// The store is loaded from the rcfile, mutated at most once, and written
/// back in full. Lookup is a linear scan; order only matters for display.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    entries: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from the bookmarks file
    ///
    /// A missing file is normal on first use and yields an empty store.
    /// Each line is split on the first tab into name and path, so paths may
    /// contain spaces; lines without a tab or with an empty field are
    /// skipped. File order is preserved.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no bookmarks file at {}", path.display());
                return Ok(Self::new());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let mut store = Self::new();
        for line in content.lines() {
            let Some((name, path)) = line.split_once('\t') else {
                continue;
            };
            if name.is_empty() || path.is_empty() {
                continue;
            }
            store.entries.push(Bookmark {
                name: name.to_string(),
                path: path.to_string(),
            });
        }

        tracing::debug!("loaded {} bookmarks from {}", store.len(), path.display());
        Ok(store)
    }

    /// Save the store to the bookmarks file, overwriting it entirely
    ///
    /// Records are written in store order, one `name\tpath` per line.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = String::new();
        for bookmark in &self.entries {
            content.push_str(&bookmark.name);
            content.push('\t');
            content.push_str(&bookmark.path);
            content.push('\n');
        }

        fs::write(path, content)?;
        tracing::debug!("saved {} bookmarks to {}", self.len(), path.display());
        Ok(())
    }

    /// Insert a bookmark, or replace the path of an existing one
    ///
    /// On a name match the path is replaced in place and the entry keeps
    /// its position; otherwise the bookmark is appended.
    pub fn upsert(&mut self, name: &str, path: &str) -> &Bookmark {
        match self.entries.iter().position(|b| b.name == name) {
            Some(idx) => {
                self.entries[idx].path = path.to_string();
                &self.entries[idx]
            }
            None => {
                self.entries.push(Bookmark {
                    name: name.to_string(),
                    path: path.to_string(),
                });
                let idx = self.entries.len() - 1;
                &self.entries[idx]
            }
        }
    }

    /// Find a bookmark by exact name; first match wins
    pub fn find(&self, name: &str) -> Option<&Bookmark> {
        self.entries.iter().find(|b| b.name == name)
    }

    /// Delete the first bookmark with the given name
    ///
    /// The relative order of the remaining entries is preserved. Fails
    /// without touching the store when the name is absent.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.entries.iter().position(|b| b.name == name) {
            Some(idx) => {
                self.entries.remove(idx);
                Ok(())
            }
            None => Err(Error::BookmarkNotFound),
        }
    }

    /// Iterate over bookmarks in store order
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_store() -> BookmarkStore {
        let mut store = BookmarkStore::new();
        store.upsert("work", "/home/u/work");
        store.upsert("docs", "/home/u/Documents");
        store.upsert("tmp", "/tmp");
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BookmarkStore::new();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = BookmarkStore::load(&dir.path().join(".jumprc")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_load_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let rcfile = dir.path().join(".jumprc");

        let store = sample_store();
        store.save(&rcfile).unwrap();
        let loaded = BookmarkStore::load(&rcfile).unwrap();

        let before: Vec<_> = store.iter().collect();
        let after: Vec<_> = loaded.iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_load_keeps_paths_with_spaces() {
        let dir = TempDir::new().unwrap();
        let rcfile = dir.path().join(".jumprc");
        std::fs::write(&rcfile, "music\t/home/u/My Music\n").unwrap();

        let store = BookmarkStore::load(&rcfile).unwrap();
        assert_eq!(store.find("music").unwrap().path, "/home/u/My Music");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let rcfile = dir.path().join(".jumprc");
        std::fs::write(
            &rcfile,
            "work\t/home/u/work\nno-tab-here\n\t/orphan/path\nempty-path\t\n\ndocs\t/home/u/Documents\n",
        )
        .unwrap();

        let store = BookmarkStore::load(&rcfile).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find("work").is_some());
        assert!(store.find("docs").is_some());
    }

    #[test]
    fn test_upsert_replaces_path_in_place() {
        let mut store = sample_store();
        let len_before = store.len();

        store.upsert("docs", "/srv/docs");

        assert_eq!(store.len(), len_before);
        assert_eq!(store.find("docs").unwrap().path, "/srv/docs");
        // the entry keeps its original position
        let names: Vec<_> = store.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["work", "docs", "tmp"]);
    }

    #[test]
    fn test_upsert_keeps_names_unique() {
        let mut store = BookmarkStore::new();
        store.upsert("x", "/a");
        store.upsert("x", "/b");
        store.upsert("x", "/c");

        assert_eq!(store.len(), 1);
        assert_eq!(store.find("x").unwrap().path, "/c");
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let store = sample_store();
        assert!(store.find("work").is_some());
        assert!(store.find("Work").is_none());
    }

    #[test]
    fn test_delete_removes_exactly_one_entry() {
        let mut store = sample_store();
        store.delete("docs").unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.find("docs").is_none());
        let names: Vec<_> = store.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["work", "tmp"]);
    }

    #[test]
    fn test_delete_absent_name_fails_and_leaves_store_unchanged() {
        let mut store = sample_store();
        let before: Vec<_> = store.iter().cloned().collect();

        let err = store.delete("missing").unwrap_err();
        assert!(matches!(err, Error::BookmarkNotFound));

        let after: Vec<_> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_hand_edited_duplicates_first_occurrence_wins() {
        let dir = TempDir::new().unwrap();
        let rcfile = dir.path().join(".jumprc");
        std::fs::write(&rcfile, "x\t/first\nx\t/second\n").unwrap();

        let store = BookmarkStore::load(&rcfile).unwrap();
        assert_eq!(store.find("x").unwrap().path, "/first");
    }
}
