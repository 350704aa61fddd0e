//! Pending-image store for the two-upload concatenation handshake.
//!
//! Stage one of the handshake encodes the current grid and parks it, keyed
//! by session id, until stage two arrives and consumes it. The store is an
//! explicit dependency of the pipeline rather than an ambient path on disk,
//! so tests run against [`MemoryStore`] and deployments that must survive a
//! restart use [`FsStore`].
//!
//! The engine assumes at most one in-flight pipeline per session id; the
//! request router serialises sessions.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::FilterResult;

/// Keyed byte store for stage-one artifacts: put/get/delete by session id.
///
/// `put` on an existing session replaces the stored artifact (a newer first
/// upload supersedes the old one). `delete` of a missing session is a no-op.
pub trait PendingStore {
    fn put(&mut self, session: &str, bytes: Vec<u8>) -> FilterResult<()>;
    fn get(&self, session: &str) -> FilterResult<Option<Vec<u8>>>;
    fn delete(&mut self, session: &str) -> FilterResult<()>;
}

/// In-process store backed by a `HashMap`. The default for tests and
/// single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently holding a pending image.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PendingStore for MemoryStore {
    fn put(&mut self, session: &str, bytes: Vec<u8>) -> FilterResult<()> {
        self.entries.insert(session.to_string(), bytes);
        Ok(())
    }

    fn get(&self, session: &str) -> FilterResult<Option<Vec<u8>>> {
        Ok(self.entries.get(session).cloned())
    }

    fn delete(&mut self, session: &str) -> FilterResult<()> {
        self.entries.remove(session);
        Ok(())
    }
}

/// Durable store: one file per session under a root directory.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStore { root: root.into() }
    }

    /// Session ids become file names; anything outside `[A-Za-z0-9_-]`
    /// is replaced so an id can never escape the root directory.
    fn path_for(&self, session: &str) -> PathBuf {
        let name: String = session
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.png"))
    }
}

impl PendingStore for FsStore {
    fn put(&mut self, session: &str, bytes: Vec<u8>) -> FilterResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(session), bytes)?;
        Ok(())
    }

    fn get(&self, session: &str) -> FilterResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(session)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, session: &str) -> FilterResult<()> {
        match fs::remove_file(self.path_for(session)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();

        store.put("chat-1", vec![1, 2, 3]).unwrap();

        assert_eq!(store.get("chat-1").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.get("chat-2").unwrap(), None);

        store.delete("chat-1").unwrap();
        assert_eq!(store.get("chat-1").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_put_replaces() {
        let mut store = MemoryStore::new();

        store.put("chat-1", vec![1]).unwrap();
        store.put("chat-1", vec![2]).unwrap();

        assert_eq!(store.get("chat-1").unwrap(), Some(vec![2]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_fs_store_round_trip() {
        let root = std::env::temp_dir().join(format!("graymill-store-{}", std::process::id()));
        let mut store = FsStore::new(&root);

        store.put("chat 9", vec![7, 8]).unwrap();
        assert_eq!(store.get("chat 9").unwrap(), Some(vec![7, 8]));

        store.delete("chat 9").unwrap();
        assert_eq!(store.get("chat 9").unwrap(), None);

        // Deleting again is a no-op.
        store.delete("chat 9").unwrap();

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_fs_store_sanitises_session_ids() {
        let store = FsStore::new("/tmp/pending");

        let path = store.path_for("../../etc/passwd");

        assert!(path.starts_with("/tmp/pending"));
        assert_eq!(path.file_name().unwrap(), "______etc_passwd.png");
    }
}
