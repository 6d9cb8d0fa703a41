use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Scoped override of the process PATH variable.
///
/// Mutating the environment is global and not thread-safe. Hold the lock for
/// the guard's lifetime so tests don't race even if a #[serial] annotation
/// is missed, and restore the original value on drop.
pub(crate) struct PathGuard {
    original: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl PathGuard {
    /// Replace PATH with exactly `dir` for the guard's lifetime.
    pub(crate) fn replace(dir: &Path) -> Self {
        Self::set(dir.as_os_str().to_owned())
    }

    /// Empty PATH so no executable resolves for the guard's lifetime.
    pub(crate) fn clear() -> Self {
        Self::set(OsString::new())
    }

    fn set(value: OsString) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::var_os("PATH");
        // SAFETY: every PATH mutation in this test binary goes through
        // ENV_LOCK, which this guard holds until drop.
        unsafe { std::env::set_var("PATH", &value) };
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        // SAFETY: still holding ENV_LOCK.
        unsafe {
            match &self.original {
                Some(path) => std::env::set_var("PATH", path),
                None => std::env::remove_var("PATH"),
            }
        }
    }
}

/// Write an executable stub script into `dir` and return its path.
#[cfg(unix)]
pub(crate) fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
