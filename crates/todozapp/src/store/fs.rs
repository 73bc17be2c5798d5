use super::SlotStore;
use crate::error::{Result, TodozError};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Production slot: one JSON document in one file.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot in the platform data directory
    /// (e.g. `~/.local/share/todoz/todos.json` on Linux).
    pub fn at_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "todoz")
            .ok_or_else(|| TodozError::Store("No home directory available".to_string()))?;
        Ok(Self::new(dirs.data_dir().join("todos.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TodozError::Io)?;
            }
        }
        Ok(())
    }

    fn sidecar_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("slot"));
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    fn write_atomic(&self, target: &Path, payload: &str) -> Result<()> {
        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("slot");
        let tmp = target.with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()));

        fs::write(&tmp, payload).map_err(TodozError::Io)?;
        fs::rename(&tmp, target).map_err(TodozError::Io)?;
        Ok(())
    }
}

impl SlotStore for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(&self.path).map_err(TodozError::Io)?;
        Ok(Some(payload))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        self.ensure_parent()?;
        self.write_atomic(&self.path, payload)
    }

    fn quarantine(&mut self, payload: &str) -> Result<()> {
        self.ensure_parent()?;
        let sidecar = self.sidecar_path();
        self.write_atomic(&sidecar, payload)
    }
}
