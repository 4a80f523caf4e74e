//! Addon manager: owns registration and drives generation.
//!
//! Constructing an [`AddonManager`] wipes the output directory, lays out both
//! packs and writes their manifests. Definitions are then registered in
//! order and [`AddonManager::generate`] writes every document. Generation
//! can be repeated: per-definition files are overwritten, shared documents
//! are merged again and lang lines appended again.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::accumulator::{
    merge, sound_entry, texture_entry, BlockSoundTable, ItemTextureAtlas, MergeOutcome,
    TerrainTextureAtlas,
};
use crate::biome::Biome;
use crate::block::Block;
use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_MIN_ENGINE_VERSION, DEFAULT_PACK_VERSION};
use crate::entity::Entity;
use crate::error::Result;
use crate::item::Item;
use crate::json::write_document;
use crate::lang;
use crate::layout::{self, ensure_path, PackLayout, PathKind};
use crate::manifest::{
    build_behaviour_manifest, build_resource_manifest, Manifest, PackInfo, PackVersion,
};
use crate::namespace::Namespace;
use crate::recipe::Recipe;

/// Everything the manager needs to lay out an addon.
#[derive(Debug, Clone, PartialEq)]
pub struct AddonConfig {
    /// Display name; the namespace is derived from it unless overridden.
    pub name: String,
    pub description: String,
    /// Used verbatim when set.
    pub namespace: Option<String>,
    /// Wiped and recreated when the manager is constructed.
    pub output_dir: PathBuf,
    pub version: PackVersion,
    pub min_engine_version: PackVersion,
    pub language: String,
}

impl AddonConfig {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            namespace: None,
            output_dir: output_dir.into(),
            version: PackVersion(DEFAULT_PACK_VERSION),
            min_engine_version: PackVersion(DEFAULT_MIN_ENGINE_VERSION),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Counters for one [`AddonManager::generate`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Per-definition documents written (items, blocks, recipes, entities, biomes).
    pub documents_written: usize,
    pub lang_entries: usize,
    /// Shared documents that had to be started over.
    pub accumulator_resets: usize,
}

impl GenerationReport {
    fn record_merge(&mut self, outcome: MergeOutcome) {
        if outcome == MergeOutcome::Reinitialized {
            self.accumulator_resets += 1;
        }
    }
}

pub struct AddonManager {
    namespace: Namespace,
    layout: PackLayout,
    language: String,
    min_engine_version: PackVersion,
    resource_manifest: Manifest,
    behaviour_manifest: Manifest,

    items: Vec<Item>,
    blocks: Vec<Block>,
    recipes: Vec<Recipe>,
    entities: Vec<Entity>,
    biomes: Vec<Biome>,
}

impl AddonManager {
    /// Wipe `config.output_dir`, create both packs and write their manifests.
    pub fn new(config: AddonConfig) -> Result<Self> {
        let namespace = Namespace::resolve(&config.name, config.namespace.as_deref());
        layout::wipe(&config.output_dir)?;
        let layout = PackLayout::create(&config.output_dir, &namespace)?;

        let info = PackInfo {
            name: config.name,
            description: config.description,
            version: config.version,
            min_engine_version: config.min_engine_version,
        };

        debug!("Setting up resources manifest");
        let resource_manifest = build_resource_manifest(&info);
        emit(&layout.resource_manifest(), &resource_manifest)?;

        debug!("Setting up behaviour manifest");
        let behaviour_manifest = build_behaviour_manifest(&info, &resource_manifest);
        emit(&layout.behaviour_manifest(), &behaviour_manifest)?;

        info!(
            "Initialized addon '{}' v{} (namespace '{namespace}') in {}",
            info.name,
            resource_manifest.version_string(),
            config.output_dir.display()
        );

        Ok(Self {
            namespace,
            layout,
            language: config.language,
            min_engine_version: config.min_engine_version,
            resource_manifest,
            behaviour_manifest,
            items: Vec::new(),
            blocks: Vec::new(),
            recipes: Vec::new(),
            entities: Vec::new(),
            biomes: Vec::new(),
        })
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn layout(&self) -> &PackLayout {
        &self.layout
    }

    pub fn resource_manifest(&self) -> &Manifest {
        &self.resource_manifest
    }

    pub fn behaviour_manifest(&self) -> &Manifest {
        &self.behaviour_manifest
    }

    /// Register an item; returns its position.
    pub fn add_item(&mut self, item: Item) -> usize {
        debug!("Adding item with id '{}'", item.id);
        self.items.push(item);
        self.items.len() - 1
    }

    /// Register several items; returns the number of registered items.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> usize {
        for item in items {
            self.add_item(item);
        }
        self.items.len()
    }

    pub fn add_block(&mut self, block: Block) -> usize {
        debug!("Adding block with id '{}'", block.id);
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    pub fn add_blocks(&mut self, blocks: impl IntoIterator<Item = Block>) -> usize {
        for block in blocks {
            self.add_block(block);
        }
        self.blocks.len()
    }

    /// Register a recipe that does not belong to a registered item or block.
    pub fn add_recipe(&mut self, recipe: impl Into<Recipe>) -> usize {
        let recipe = recipe.into();
        debug!(
            "Adding recipe for item/block with id '{}'",
            recipe.result_item_id()
        );
        self.recipes.push(recipe);
        self.recipes.len() - 1
    }

    pub fn add_entity(&mut self, entity: Entity) -> usize {
        debug!("Adding entity with id '{}'", entity.id);
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn add_biome(&mut self, biome: Biome) -> usize {
        debug!("Adding biome with id '{}'", biome.id);
        self.biomes.push(biome);
        self.biomes.len() - 1
    }

    /// Write every registered definition: items, blocks, standalone recipes,
    /// entities, then biomes, each in registration order.
    pub fn generate(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        self.generate_items(&mut report)?;
        self.generate_blocks(&mut report)?;
        for recipe in &self.recipes {
            self.generate_recipe(recipe, &mut report)?;
        }
        self.generate_entities(&mut report)?;
        self.generate_biomes(&mut report)?;

        info!(
            "Generated {} items, {} blocks, {} recipes, {} entities, {} biomes ({} documents)",
            self.items.len(),
            self.blocks.len(),
            self.recipes.len(),
            self.entities.len(),
            self.biomes.len(),
            report.documents_written
        );
        Ok(report)
    }

    fn generate_items(&self, report: &mut GenerationReport) -> Result<()> {
        for item in &self.items {
            let identifier = self.namespace.qualify(&item.id);
            self.write_lang(&lang::item_name_key(&identifier), &item.display_name, report)?;

            let outcome = merge::<ItemTextureAtlas>(
                &self.layout.item_texture_atlas(),
                &identifier,
                texture_entry(&item.atlas_texture()),
            )?;
            report.record_merge(outcome);
            debug!("Make sure to provide the texture for item with id '{}'", item.id);

            if let Some(recipe) = &item.recipe {
                self.generate_recipe(recipe, report)?;
            }

            let path = self.layout.items_dir().join(format!("{}.json", item.id));
            emit(&path, &item.construct(&self.namespace))?;
            report.documents_written += 1;
        }
        Ok(())
    }

    fn generate_blocks(&self, report: &mut GenerationReport) -> Result<()> {
        for block in &self.blocks {
            let identifier = self.namespace.qualify(&block.id);
            self.write_lang(&lang::tile_name_key(&identifier), &block.display_name, report)?;

            let outcome = merge::<TerrainTextureAtlas>(
                &self.layout.terrain_texture_atlas(),
                &identifier,
                texture_entry(&block.atlas_texture()),
            )?;
            report.record_merge(outcome);
            debug!("Make sure to provide the texture for block with id '{}'", block.id);

            let outcome = merge::<BlockSoundTable>(
                &self.layout.block_sounds(),
                &identifier,
                sound_entry(block.sound, &identifier),
            )?;
            report.record_merge(outcome);

            if let Some(recipe) = &block.recipe {
                self.generate_recipe(recipe, report)?;
            }

            let path = self.layout.blocks_dir().join(format!("{}.json", block.id));
            emit(&path, &block.construct(&self.namespace))?;
            report.documents_written += 1;
        }
        Ok(())
    }

    fn generate_recipe(&self, recipe: &Recipe, report: &mut GenerationReport) -> Result<()> {
        let path = self
            .layout
            .recipes_dir()
            .join(format!("{}.json", recipe.item_id()));
        emit(&path, &recipe.construct(&self.namespace))?;
        report.documents_written += 1;
        Ok(())
    }

    fn generate_entities(&self, report: &mut GenerationReport) -> Result<()> {
        for entity in &self.entities {
            let identifier = self.namespace.qualify(&entity.id);
            self.write_lang(
                &lang::spawn_egg_name_key(&identifier),
                &format!("{} Spawn Egg", entity.name),
                report,
            )?;

            let path = self
                .layout
                .client_entities_dir()
                .join(format!("{}.entity.json", entity.id));
            emit(
                &path,
                &entity.construct_resource(&self.namespace, self.min_engine_version),
            )?;

            let path = self.layout.entities_dir().join(format!("{}.json", entity.id));
            emit(&path, &entity.construct_behaviour(&self.namespace))?;
            report.documents_written += 2;
        }
        Ok(())
    }

    fn generate_biomes(&self, report: &mut GenerationReport) -> Result<()> {
        if self.biomes.is_empty() {
            return Ok(());
        }
        let dir = self.layout.biomes_dir();
        ensure_path(&dir, PathKind::Directory)?;
        for biome in &self.biomes {
            emit(
                &dir.join(format!("{}.json", biome.id)),
                &biome.construct(&self.namespace),
            )?;
            report.documents_written += 1;
        }
        Ok(())
    }

    fn write_lang(&self, key: &str, value: &str, report: &mut GenerationReport) -> Result<()> {
        lang::append_entry(&self.layout.lang_file(&self.language), key, value)?;
        report.lang_entries += 1;
        Ok(())
    }
}

/// Make sure `path` exists, then overwrite it with `document`.
fn emit<T: Serialize + ?Sized>(path: &Path, document: &T) -> Result<()> {
    ensure_path(path, PathKind::File)?;
    write_document(path, document)
}
