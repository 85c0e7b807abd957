use crate::error::{Result, StateError};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "clicktochat";
const STATE_FILENAME: &str = "state.json";

pub fn state_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_STATE_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StateError::InvalidStatePath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StateError::MissingHomeDir)?;
    Ok(home.join(".local").join("state").join(APP_DIR))
}

pub fn default_state_path() -> Result<PathBuf> {
    Ok(state_dir()?.join(STATE_FILENAME))
}

/// Picks the first explicit path, falling back to the XDG state location.
pub fn resolve_state_path(flag: Option<PathBuf>, configured: Option<PathBuf>) -> Result<PathBuf> {
    match flag.or(configured) {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(StateError::InvalidStatePath(path));
            }
            Ok(path)
        }
        None => default_state_path(),
    }
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent)?;
    restrict_dir_permissions(parent)
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

/// Creates `path` fresh, readable by the owner only from the first byte on.
///
/// A leftover file at `path` is removed first so its mode is never inherited.
pub(crate) fn create_private_file(path: &Path) -> Result<File> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    Ok(options.open(path)?)
}
