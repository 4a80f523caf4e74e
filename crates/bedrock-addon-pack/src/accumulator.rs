//! Shared resource pack documents that many definitions merge into.
//!
//! Every merge reads the whole document, inserts one entry and writes it back.
//! When the existing file is missing, empty, not JSON or not shaped like the
//! expected document, it is replaced by a fresh document holding only the new
//! entry: entries merged before the corruption are lost.

use std::fs;
use std::path::Path;

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::catalog::BlockSound;
use crate::constants::FORMAT_VERSION_BLOCK_SOUND;
use crate::error::Result;
use crate::json::write_document;
use crate::layout::{ensure_path, PathKind};

/// What a merge did to the document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The entry was added to the existing document.
    Merged,
    /// The existing content was unusable and the document was started over.
    Reinitialized,
}

/// A document kind that accumulates keyed entries.
pub trait SharedDocument {
    /// Name used in log messages.
    const NAME: &'static str;

    /// Header fields written when the document is (re)created.
    fn headers() -> Map<String, Value>;

    /// The map entries are inserted into, or `None` if `document` does not
    /// have the expected shape.
    fn entries(document: &mut Value) -> Option<&mut Map<String, Value>>;
}

/// `textures/item_texture.json`.
pub struct ItemTextureAtlas;

/// `textures/terrain_texture.json`.
pub struct TerrainTextureAtlas;

/// `blocks.json` in the resource pack.
pub struct BlockSoundTable;

fn texture_data(document: &mut Value) -> Option<&mut Map<String, Value>> {
    document.get_mut("texture_data")?.as_object_mut()
}

impl SharedDocument for ItemTextureAtlas {
    const NAME: &'static str = "item texture atlas";

    fn headers() -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("texture_name".into(), json!("atlas.items"));
        doc.insert("texture_data".into(), json!({}));
        doc
    }

    fn entries(document: &mut Value) -> Option<&mut Map<String, Value>> {
        texture_data(document)
    }
}

impl SharedDocument for TerrainTextureAtlas {
    const NAME: &'static str = "terrain texture atlas";

    fn headers() -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("texture_name".into(), json!("atlas.terrain"));
        doc.insert("padding".into(), json!(8));
        doc.insert("num_mip_levels".into(), json!(4));
        doc.insert("texture_data".into(), json!({}));
        doc
    }

    fn entries(document: &mut Value) -> Option<&mut Map<String, Value>> {
        texture_data(document)
    }
}

impl SharedDocument for BlockSoundTable {
    const NAME: &'static str = "block sound table";

    fn headers() -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("format_version".into(), json!(FORMAT_VERSION_BLOCK_SOUND));
        doc
    }

    // Entries live next to the header at the top level.
    fn entries(document: &mut Value) -> Option<&mut Map<String, Value>> {
        document.as_object_mut()
    }
}

/// Atlas entry pointing at a texture path.
pub fn texture_entry(texture_path: &str) -> Value {
    json!({ "textures": texture_path })
}

/// Sound table entry for a block whose terrain texture is `texture`.
pub fn sound_entry(sound: BlockSound, texture: &str) -> Value {
    json!({ "sound": sound.as_str(), "textures": texture })
}

/// Insert `value` under `key` into the document at `path`.
pub fn merge<D: SharedDocument>(path: &Path, key: &str, value: Value) -> Result<MergeOutcome> {
    ensure_path(path, PathKind::File)?;
    // An unreadable file is handled like a corrupt one.
    let existing = fs::read_to_string(path).unwrap_or_default();
    let mut document = serde_json::from_str::<Value>(&existing).unwrap_or(Value::Null);

    let outcome = match D::entries(&mut document) {
        Some(entries) => {
            entries.insert(key.to_string(), value);
            MergeOutcome::Merged
        }
        None => {
            if existing.trim().is_empty() {
                debug!("Creating {} at {}", D::NAME, path.display());
            } else {
                warn!(
                    "Existing {} at {} is malformed, starting it over",
                    D::NAME,
                    path.display()
                );
            }
            let mut fresh = Value::Object(D::headers());
            if let Some(entries) = D::entries(&mut fresh) {
                entries.insert(key.to_string(), value);
            }
            document = fresh;
            MergeOutcome::Reinitialized
        }
    };

    write_document(path, &document)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn atlas_accumulates_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("textures/item_texture.json");

        let pie = texture_entry("textures/items/pie");
        let first = merge::<ItemTextureAtlas>(&path, "demo:pie", pie).unwrap();
        assert_eq!(first, MergeOutcome::Reinitialized);
        let pizza = texture_entry("textures/items/pizza");
        let second = merge::<ItemTextureAtlas>(&path, "demo:pizza", pizza).unwrap();
        assert_eq!(second, MergeOutcome::Merged);

        let doc = read(&path);
        assert_eq!(doc["texture_name"], "atlas.items");
        assert_eq!(doc["texture_data"]["demo:pie"]["textures"], "textures/items/pie");
        assert_eq!(doc["texture_data"]["demo:pizza"]["textures"], "textures/items/pizza");
    }

    #[test]
    fn corrupt_atlas_loses_prior_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("item_texture.json");

        let pie = texture_entry("textures/items/pie");
        merge::<ItemTextureAtlas>(&path, "demo:pie", pie).unwrap();
        fs::write(&path, "{ this is not json").unwrap();
        let pizza = texture_entry("textures/items/pizza");
        let outcome = merge::<ItemTextureAtlas>(&path, "demo:pizza", pizza).unwrap();
        assert_eq!(outcome, MergeOutcome::Reinitialized);

        let doc = read(&path);
        let data = doc["texture_data"].as_object().unwrap();
        assert_eq!(data.len(), 1);
        assert!(data.contains_key("demo:pizza"));
        assert_eq!(doc["texture_name"], "atlas.items");
    }

    #[test]
    fn wrong_shape_counts_as_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("terrain_texture.json");
        fs::write(&path, r#"{"texture_name": "custom"}"#).unwrap();

        let marble = texture_entry("textures/blocks/marble");
        let outcome = merge::<TerrainTextureAtlas>(&path, "demo:marble", marble).unwrap();
        assert_eq!(outcome, MergeOutcome::Reinitialized);
        let doc = read(&path);
        assert_eq!(doc["texture_name"], "atlas.terrain");
        assert_eq!(doc["padding"], 8);
        assert_eq!(doc["num_mip_levels"], 4);
    }

    #[test]
    fn headers_survive_merges() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("terrain_texture.json");
        fs::write(
            &path,
            r#"{"texture_name": "atlas.terrain", "padding": 2, "texture_data": {}}"#,
        )
        .unwrap();
        let entry = texture_entry("textures/blocks/a");
        merge::<TerrainTextureAtlas>(&path, "demo:a", entry).unwrap();
        let doc = read(&path);
        assert_eq!(doc["padding"], 2);
        assert!(doc.get("num_mip_levels").is_none());
        assert_eq!(doc["texture_data"]["demo:a"]["textures"], "textures/blocks/a");
    }

    #[test]
    fn sound_table_entries_sit_beside_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blocks.json");
        let wood = sound_entry(BlockSound::Wood, "demo:a");
        merge::<BlockSoundTable>(&path, "demo:a", wood).unwrap();
        let stone = sound_entry(BlockSound::Stone, "demo:b");
        merge::<BlockSoundTable>(&path, "demo:b", stone).unwrap();

        let doc = read(&path);
        assert_eq!(doc["format_version"], json!([1, 1, 0]));
        assert_eq!(doc["demo:a"]["sound"], "wood");
        assert_eq!(doc["demo:a"]["textures"], "demo:a");
        assert_eq!(doc["demo:b"]["sound"], "stone");
    }

    #[test]
    fn same_key_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blocks.json");
        let wood = sound_entry(BlockSound::Wood, "demo:a");
        merge::<BlockSoundTable>(&path, "demo:a", wood).unwrap();
        let glass = sound_entry(BlockSound::Glass, "demo:a");
        merge::<BlockSoundTable>(&path, "demo:a", glass).unwrap();
        let doc = read(&path);
        assert_eq!(doc.as_object().unwrap().len(), 2);
        assert_eq!(doc["demo:a"]["sound"], "glass");
    }
}
