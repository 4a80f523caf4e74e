//! Directory topology of the generated behaviour and resource packs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AddonError, Result};
use crate::namespace::Namespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Create `path` (and its parents) as an empty file or directory if it does
/// not exist yet. Existing paths are left untouched, files are never truncated.
pub fn ensure_path(path: &Path, kind: PathKind) -> Result<&Path> {
    if path.exists() {
        return Ok(path);
    }
    match kind {
        PathKind::Directory => {
            fs::create_dir_all(path).map_err(|e| AddonError::io(path, e))?;
        }
        PathKind::File => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| AddonError::io(parent, e))?;
            }
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AddonError::io(path, e))?;
        }
    }
    Ok(path)
}

/// Delete everything under `root` and recreate it empty.
pub fn wipe(root: &Path) -> Result<()> {
    if root.exists() {
        fs::remove_dir_all(root).map_err(|e| AddonError::io(root, e))?;
    }
    fs::create_dir_all(root).map_err(|e| AddonError::io(root, e))
}

/// Paths of both packs under one output root.
#[derive(Debug, Clone)]
pub struct PackLayout {
    behaviour: PathBuf,
    resources: PathBuf,
}

impl PackLayout {
    /// Compute the layout for `namespace` under `root` without touching disk.
    pub fn new(root: &Path, namespace: &Namespace) -> Self {
        Self {
            behaviour: root.join(format!("{namespace}_behaviour")),
            resources: root.join(format!("{namespace}_resources")),
        }
    }

    /// Compute the layout and create every pack folder.
    pub fn create(root: &Path, namespace: &Namespace) -> Result<Self> {
        let layout = Self::new(root, namespace);
        for dir in [
            layout.behaviour_root().to_path_buf(),
            layout.resource_root().to_path_buf(),
            layout.items_dir(),
            layout.blocks_dir(),
            layout.recipes_dir(),
            layout.entities_dir(),
            layout.item_textures_dir(),
            layout.block_textures_dir(),
            layout.texts_dir(),
            layout.client_entities_dir(),
        ] {
            ensure_path(&dir, PathKind::Directory)?;
        }
        Ok(layout)
    }

    pub fn behaviour_root(&self) -> &Path {
        &self.behaviour
    }

    pub fn resource_root(&self) -> &Path {
        &self.resources
    }

    pub fn behaviour_manifest(&self) -> PathBuf {
        self.behaviour.join("manifest.json")
    }

    pub fn resource_manifest(&self) -> PathBuf {
        self.resources.join("manifest.json")
    }

    pub fn items_dir(&self) -> PathBuf {
        self.behaviour.join("items")
    }

    pub fn blocks_dir(&self) -> PathBuf {
        self.behaviour.join("blocks")
    }

    pub fn recipes_dir(&self) -> PathBuf {
        self.behaviour.join("recipes")
    }

    pub fn entities_dir(&self) -> PathBuf {
        self.behaviour.join("entities")
    }

    /// Only created once a biome is generated.
    pub fn biomes_dir(&self) -> PathBuf {
        self.behaviour.join("biomes")
    }

    pub fn item_textures_dir(&self) -> PathBuf {
        self.resources.join("textures").join("items")
    }

    pub fn block_textures_dir(&self) -> PathBuf {
        self.resources.join("textures").join("blocks")
    }

    pub fn item_texture_atlas(&self) -> PathBuf {
        self.resources.join("textures").join("item_texture.json")
    }

    pub fn terrain_texture_atlas(&self) -> PathBuf {
        self.resources.join("textures").join("terrain_texture.json")
    }

    pub fn block_sounds(&self) -> PathBuf {
        self.resources.join("blocks.json")
    }

    pub fn texts_dir(&self) -> PathBuf {
        self.resources.join("texts")
    }

    pub fn lang_file(&self, language: &str) -> PathBuf {
        self.texts_dir().join(format!("{language}.lang"))
    }

    pub fn client_entities_dir(&self) -> PathBuf {
        self.resources.join("entity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_path_creates_parents_and_never_truncates() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a/b/c.txt");
        ensure_path(&file, PathKind::File).unwrap();
        assert!(file.is_file());
        assert_eq!(fs::read_to_string(&file).unwrap(), "");

        fs::write(&file, "keep me").unwrap();
        ensure_path(&file, PathKind::File).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");

        let dir = tmp.path().join("x/y");
        ensure_path(&dir, PathKind::Directory).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_builds_both_packs() {
        let tmp = TempDir::new().unwrap();
        let layout = PackLayout::create(tmp.path(), &Namespace::verbatim("demo")).unwrap();
        assert_eq!(layout.behaviour_root(), tmp.path().join("demo_behaviour"));
        assert_eq!(layout.resource_root(), tmp.path().join("demo_resources"));
        for dir in ["items", "blocks", "recipes", "entities"] {
            assert!(tmp.path().join("demo_behaviour").join(dir).is_dir(), "{dir}");
        }
        for dir in ["textures/items", "textures/blocks", "texts", "entity"] {
            assert!(tmp.path().join("demo_resources").join(dir).is_dir(), "{dir}");
        }
        assert!(!layout.biomes_dir().exists());
        assert_eq!(
            layout.lang_file("en_US"),
            tmp.path().join("demo_resources/texts/en_US.lang")
        );
    }

    #[test]
    fn wipe_clears_previous_output() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("out");
        fs::create_dir_all(root.join("stale")).unwrap();
        fs::write(root.join("stale/file.json"), "{}").unwrap();
        wipe(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }
}
