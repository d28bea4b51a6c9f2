//! In-memory filesystem for exercising [`GenerateService`] without touching
//! disk.
//!
//! [`GenerateService`]: modgen_core::application::GenerateService

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ModgenResult,
};

/// Filesystem kept in memory. Clones share the same state, so a test can
/// hand one clone to the service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    /// Successful writes, oldest first.
    writes: Vec<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a written fragment.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.read().ok()?.files.get(path.as_ref()).cloned()
    }

    /// Paths written so far, in write order.
    pub fn write_log(&self) -> Vec<PathBuf> {
        self.state
            .read()
            .map(|s| s.writes.clone())
            .unwrap_or_default()
    }

    /// Make every write to `path` fail, like a read-only output file.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut state) = self.state.write() {
            state.denied.insert(path.into());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        state
            .dirs
            .extend(path.ancestors().filter(|p| !p.as_os_str().is_empty()).map(Path::to_path_buf));
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let reason = if state.denied.contains(path) {
            Some("permission denied")
        } else {
            match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() && !state.dirs.contains(dir) => {
                    Some("no such directory")
                }
                _ => None,
            }
        };
        if let Some(reason) = reason {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        state.files.insert(path.to_path_buf(), content.to_owned());
        state.writes.push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .map(|s| s.files.contains_key(path) || s.dirs.contains(path))
            .unwrap_or(false)
    }
}
