//! The Read phase: loading source files into an addressable arena.

use std::path::Path;

use crate::arena::Arena;
use crate::define_id;
use crate::error::CompileError;
use crate::intern::{StringArena, StringId};

define_id!(
    /// Handle into a [`FileArena`].
    pub struct FileId;
);

pub struct FileRecord {
    pub path: StringId,
    pub bytes: Vec<u8>,
}

impl FileRecord {
    pub fn source(&self) -> &str {
        std::str::from_utf8(&self.bytes).expect("source files are valid utf8")
    }
}

/// Owns every file's byte buffer for the compilation.
pub struct FileArena {
    files: Arena<FileRecord>,
}

impl FileArena {
    pub fn new() -> Self {
        Self { files: Arena::new() }
    }

    /// Read `path` off disk and register it, interning its path string.
    pub fn load(&mut self, path: &Path, strings: &mut StringArena) -> Result<FileId, CompileError> {
        let bytes = std::fs::read(path).map_err(|source| CompileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let path_id = strings.intern(&path.display().to_string());
        let id = self.files.push(FileRecord { path: path_id, bytes });
        Ok(FileId(id))
    }

    pub fn get(&self, id: FileId) -> &FileRecord {
        self.files.get(id.0)
    }
}

impl Default for FileArena {
    fn default() -> Self {
        Self::new()
    }
}
