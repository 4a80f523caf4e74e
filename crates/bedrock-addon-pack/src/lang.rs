//! Localization (`texts/<language>.lang`) writing.
//!
//! Lang files are append-only `key=value` lines. Leading whitespace of the
//! existing text is dropped and entries are joined with `\n`, so the file
//! never starts with a blank line and never ends with a newline.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AddonError, Result};
use crate::layout::{ensure_path, PathKind};

/// Lang key of an item's display name.
pub fn item_name_key(qualified_id: &str) -> String {
    format!("item.{qualified_id}.name")
}

/// Lang key of a block's display name.
pub fn tile_name_key(qualified_id: &str) -> String {
    format!("tile.{qualified_id}.name")
}

/// Lang key of an entity's spawn egg name.
pub fn spawn_egg_name_key(qualified_id: &str) -> String {
    format!("item.spawn_egg.entity.{qualified_id}.name")
}

/// Append `key=value` to the lang file at `path`.
pub fn append_entry(path: &Path, key: &str, value: &str) -> Result<()> {
    debug!("Writing '{key}' to {} with value '{value}'", path.display());
    ensure_path(path, PathKind::File)?;
    let existing = fs::read_to_string(path).map_err(|e| AddonError::io(path, e))?;
    let existing = existing.trim_start();
    let text = if existing.is_empty() {
        format!("{key}={value}")
    } else {
        format!("{existing}\n{key}={value}")
    };
    fs::write(path, text).map_err(|e| AddonError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn entries_are_appended_line_by_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("texts/en_US.lang");
        append_entry(&path, &item_name_key("demo:pie"), "Pie").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "item.demo:pie.name=Pie");

        append_entry(&path, &tile_name_key("demo:marble"), "Marble").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "item.demo:pie.name=Pie\ntile.demo:marble.name=Marble"
        );
    }

    #[test]
    fn leading_whitespace_is_dropped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("en_US.lang");
        fs::write(&path, "\n\n  a=b").unwrap();
        append_entry(&path, "c", "d").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a=b\nc=d");
    }

    #[test]
    fn keys() {
        assert_eq!(
            spawn_egg_name_key("demo:guard"),
            "item.spawn_egg.entity.demo:guard.name"
        );
    }
}
