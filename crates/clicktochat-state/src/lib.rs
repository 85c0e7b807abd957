//! Explicit save/restore of the compose screen's text fields.
//!
//! Only [`ComposeSnapshot`] is written; the link is rebuilt on restore.

pub mod error;
pub mod paths;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clicktochat_core::{ComposeSnapshot, ComposeState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StateError};

pub const STATE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    version: u32,
    compose: ComposeSnapshot,
}

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<ComposeSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let file: StateFile =
            serde_json::from_str(&contents).map_err(|source| StateError::Parse {
                path: self.path.clone(),
                source,
            })?;
        if file.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion(file.version));
        }
        debug!(path = %self.path.display(), "state loaded");
        Ok(Some(file.compose))
    }

    /// Loads the saved compose state, or an empty one when nothing is saved.
    pub fn load_state(&self) -> Result<ComposeState> {
        Ok(self
            .load()?
            .map(ComposeState::restore)
            .unwrap_or_default())
    }

    pub fn save(&self, snapshot: &ComposeSnapshot) -> Result<()> {
        paths::ensure_parent_dir(&self.path)?;
        let file = StateFile {
            version: STATE_VERSION,
            compose: snapshot.clone(),
        };
        let mut json = serde_json::to_string_pretty(&file).map_err(StateError::Encode)?;
        json.push('\n');

        let tmp = self.tmp_path();
        let mut out = paths::create_private_file(&tmp)?;
        out.write_all(json.as_bytes())?;
        out.sync_all()?;
        drop(out);
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }

    /// Returns false when there was nothing to remove.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{StateStore, STATE_VERSION};
    use crate::error::StateError;
    use clicktochat_core::{ComposeSnapshot, ComposeState};
    use std::fs;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> StateStore {
        StateStore::new(temp.path().join("nested").join("state.json"))
    }

    #[test]
    fn load_returns_none_without_file() {
        let temp = TempDir::new().expect("tempdir");
        let store = store(&temp);
        assert!(store.load().expect("load").is_none());
        assert_eq!(store.load_state().expect("load"), ComposeState::default());
    }

    #[test]
    fn save_then_load_restores_fields_and_link() {
        let temp = TempDir::new().expect("tempdir");
        let store = store(&temp);
        let state = ComposeState::new("+1 555 0100", "see you soon");
        store.save(&state.snapshot()).expect("save");

        let restored = store.load_state().expect("load");
        assert_eq!(restored.phone(), "+1 555 0100");
        assert_eq!(restored.message(), "see you soon");
        assert_eq!(restored.link(), "https://wa.me/15550100?text=see+you+soon");
        assert!(!temp.path().join("nested").join("state.json.tmp").exists());
    }

    #[test]
    fn saved_file_has_version_and_no_link() {
        let temp = TempDir::new().expect("tempdir");
        let store = store(&temp);
        store
            .save(&ComposeSnapshot {
                phone: "42".to_string(),
                message: String::new(),
            })
            .expect("save");

        let raw = fs::read_to_string(store.path()).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["version"], STATE_VERSION);
        assert_eq!(value["compose"]["phone"], "42");
        assert!(value["compose"].get("link").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let store = store(&temp);
        store.save(&ComposeSnapshot::default()).expect("save");
        let mode = fs::metadata(store.path())
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn save_replaces_stale_temp_file_privately() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let store = store(&temp);
        let tmp = temp.path().join("nested").join("state.json.tmp");
        fs::create_dir_all(tmp.parent().expect("parent")).expect("dir");
        fs::write(&tmp, "left over").expect("write");
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o666)).expect("chmod");

        store
            .save(&ComposeState::new("7", "hi").snapshot())
            .expect("save");
        assert!(!tmp.exists());
        let mode = fs::metadata(store.path())
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load_state().expect("load").link(), "https://wa.me/7?text=hi");
    }

    #[test]
    fn load_rejects_unknown_version() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("state.json");
        fs::write(
            &path,
            r#"{ "version": 9, "compose": { "phone": "", "message": "" } }"#,
        )
        .expect("write");
        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StateError::UnsupportedVersion(9)));
    }

    #[test]
    fn load_reports_corrupt_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("state.json");
        fs::write(&path, "not json").expect("write");
        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StateError::Parse { .. }));
        assert!(err.to_string().contains("corrupt state file"));
    }

    #[test]
    fn clear_removes_saved_state() {
        let temp = TempDir::new().expect("tempdir");
        let store = store(&temp);
        assert!(!store.clear().expect("clear"));
        store.save(&ComposeSnapshot::default()).expect("save");
        assert!(store.clear().expect("clear"));
        assert!(store.load().expect("load").is_none());
    }
}
