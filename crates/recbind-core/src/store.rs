//! File-backed key-value store over the codec.
//!
//! One JSON file per key under a store directory: `put` serializes a record
//! through [`record_to_json`](crate::builder::record_to_json) and writes
//! `<dir>/<key>.json`; `get` reads it back through
//! [`bind`](crate::reader::bind). Keys resolve lexically and must stay
//! inside the store directory.

use std::fs;
use std::marker::PhantomData;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::builder;
use crate::error::{BindError, Result};
use crate::reader;
use crate::records::Record;

const EXTENSION: &str = "json";

/// File-system store for one record type.
pub struct FileStore<V: Record> {
    dir: PathBuf,
    _record: PhantomData<V>,
}

impl<V: Record> FileStore<V> {
    /// Open a store rooted at `dir`, creating the directory (and parents)
    /// when missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = normalize(&dir.into());
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            _record: PhantomData,
        })
    }

    pub fn put(&self, key: &str, rec: &V) -> Result<()> {
        let path = self.item_path(key)?;
        let text = builder::record_to_json(rec);
        debug!("store write: {}", path.display());
        fs::write(&path, text)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<V> {
        let path = self.item_path(key)?;
        debug!("store read: {}", path.display());
        let text = fs::read_to_string(&path)?;
        reader::bind(&text)
    }

    /// Resolve a key to its file, rejecting keys whose lexical resolution
    /// escapes the store directory.
    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let path = normalize(&self.dir.join(format!("{key}.{EXTENSION}")));
        if !path.starts_with(&self.dir) {
            return Err(BindError::Argument(format!(
                "key escapes the store directory: {key}"
            )));
        }
        Ok(path)
    }
}

/// Lexical normalization: resolves `.` and `..` components without touching
/// the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
