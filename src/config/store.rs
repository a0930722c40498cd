// Gitstr Auth: Config Store backends
//
// `GitConfigStore` shells out to `git config`, which is where the rest of the
// gitstr tooling keeps its settings. Reads of an unset key are not errors:
// git exits with status 1 and we report `None`. Writes have no such case, so
// any non-zero status from a write is a failure.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Mutex;

use super::ConfigError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Which configuration files a read may consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the repository's own `.git/config`.
    Local,
    /// The full git cascade (system, global, local).
    Any,
}

/// Abstraction over the persistent settings store, enabling the git-backed
/// implementation in production and an in-memory double in tests.
///
/// Writes are always repository-local. There is no locking: concurrent
/// invocations against one repository are last-write-wins.
pub trait ConfigStore {
    /// Read a setting. `Ok(None)` means the key is not set.
    fn get(&self, key: &str, scope: Scope) -> Result<Option<String>, ConfigError>;

    /// Write a setting into the repository-local configuration.
    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for &T {
    fn get(&self, key: &str, scope: Scope) -> Result<Option<String>, ConfigError> {
        (**self).get(key, scope)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}

// ─── Git Implementation ──────────────────────────────────────────────────────

/// Settings stored via `git config` in the repository at `dir`.
#[derive(Debug, Clone)]
pub struct GitConfigStore {
    dir: PathBuf,
}

impl GitConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn run(&self, args: &[&str]) -> Result<Output, ConfigError> {
        tracing::trace!(dir = %self.dir.display(), ?args, "running git config");
        Ok(Command::new("git")
            .arg("-C")
            .arg(&self.dir)
            .arg("config")
            .args(args)
            .output()?)
    }
}

fn failure(args: &[&str], output: &Output) -> ConfigError {
    ConfigError::Git {
        args: args.join(" "),
        status: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

impl ConfigStore for GitConfigStore {
    fn get(&self, key: &str, scope: Scope) -> Result<Option<String>, ConfigError> {
        let args: &[&str] = match scope {
            Scope::Local => &["--local", key],
            Scope::Any => &[key],
        };
        let output = self.run(args)?;

        let value = if output.status.success() {
            let value = String::from_utf8(output.stdout)
                .map_err(|_| ConfigError::InvalidUtf8(key.to_string()))?;
            Some(value.trim().to_string())
        } else if output.status.code() == Some(1) {
            // `git config <key>` exits 1 when the key is simply not present.
            None
        } else {
            return Err(failure(args, &output));
        };
        tracing::debug!(key, scope = ?scope, found = value.is_some(), "read git config");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let args = ["--local", key, value];
        let output = self.run(&args)?;
        if !output.status.success() {
            // Only the key goes into the error; the value may be a secret.
            return Err(failure(&args[..2], &output));
        }
        tracing::debug!(key, "wrote git config");
        Ok(())
    }
}

// ─── In-Memory Implementation ────────────────────────────────────────────────

/// A store backed by a map, with a log of every write.
///
/// Local and global scope are not distinguished.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with settings. Seeding is not recorded as a write.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(map),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every `set` call made so far, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str, _scope: Scope) -> Result<Option<String>, ConfigError> {
        let values = self
            .values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
