//! Namespace derivation and identifier formatting.
//!
//! Every identifier the addon emits is `namespace:local_id`. Local ids are
//! taken verbatim from the definitions and are not checked against the
//! identifier grammar of the game.

use std::fmt;

/// Technical prefix qualifying every content identifier of an addon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Derive a namespace from a pack display name: lower-cased, every space
    /// replaced by `_`. Runs of spaces are kept, other whitespace is untouched.
    pub fn from_display_name(name: &str) -> Self {
        Self(name.to_lowercase().replace(' ', "_"))
    }

    /// Use `namespace` as-is, without normalization.
    pub fn verbatim(namespace: impl Into<String>) -> Self {
        Self(namespace.into())
    }

    /// Resolve an explicit override, falling back to the display name.
    pub fn resolve(name: &str, explicit: Option<&str>) -> Self {
        match explicit {
            Some(ns) => Self::verbatim(ns),
            None => Self::from_display_name(name),
        }
    }

    /// Format a fully-qualified identifier, e.g. `demo:pie`.
    pub fn qualify(&self, local_id: &str) -> String {
        format!("{}:{local_id}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
