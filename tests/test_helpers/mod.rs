//! Shared helpers for datastore integration tests.

use camino::Utf8PathBuf;
use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tempfile::TempDir;

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Scoped override of datastore environment variables.
///
/// Previous values are restored on drop. Guards serialize on a global lock
/// so concurrent tests never observe each other's settings.
pub struct EnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Applies `changes`, removing variables whose value is `None`.
    pub fn apply(changes: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = changes
            .iter()
            .map(|(name, value)| {
                let old = env::var_os(name);
                unsafe {
                    // SAFETY: the global mutex serializes environment mutations in tests.
                    match value {
                        Some(new_value) => env::set_var(name, new_value),
                        None => env::remove_var(name),
                    }
                }
                (*name, old)
            })
            .collect();

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(name, previous),
                    None => env::remove_var(name),
                }
            }
        }
    }
}

/// Returns a snapshot file path inside `dir`.
///
/// # Errors
///
/// Returns an error when the temporary directory path is not UTF-8.
pub fn snapshot_path(dir: &TempDir) -> eyre::Result<Utf8PathBuf> {
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .map_err(|path| eyre::eyre!("non UTF-8 temp dir: {}", path.display()))?;
    Ok(root.join("tasks.json"))
}
