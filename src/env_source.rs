//! # Environment Sources
//!
//! Read-only key/value views of environment state. The client configuration
//! endpoint queries its source on every request and never caches, so a
//! variable changed between two requests is seen by the second one.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;

/// A queryable environment
pub trait EnvSource: Send + Sync + fmt::Debug {
    /// Value of `name`, or `None` when unset
    fn var(&self, name: &str) -> Option<String>;

    /// Every variable whose name starts with `prefix`, sorted by name
    fn vars_with_prefix(&self, prefix: &str) -> Vec<(String, String)>;
}

/// The real process environment
///
/// Values that are not valid Unicode are converted lossily rather than
/// treated as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn vars_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = std::env::vars_os()
            .filter_map(|(name, value)| {
                let name = name.into_string().ok()?;
                name.starts_with(prefix)
                    .then(|| (name, value.to_string_lossy().into_owned()))
            })
            .collect();
        vars.sort_by(|a, b| a.0.cmp(&b.0));
        vars
    }
}

/// In-memory environment that can be mutated while the server is running
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<BTreeMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(name.into(), value.into());
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.vars.write().remove(name)
    }

    pub fn clear(&self) {
        self.vars.write().clear();
    }
}

impl EnvSource for InMemoryEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.read().get(name).cloned()
    }

    fn vars_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        self.vars
            .read()
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
