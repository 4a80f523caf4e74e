//! Bedrock addon generator.
//!
//! Builds a paired behaviour pack and resource pack from in-memory content
//! definitions (items, blocks, entities, recipes, biomes). Definitions are
//! registered with an [`AddonManager`], which writes the manifests up front
//! and emits every JSON document on [`AddonManager::generate`].

pub mod accumulator;
pub mod biome;
pub mod block;
pub mod catalog;
pub mod constants;
pub mod entity;
pub mod error;
pub mod item;
pub mod json;
pub mod lang;
pub mod layout;
pub mod manager;
pub mod manifest;
pub mod namespace;
pub mod recipe;

pub use biome::Biome;
pub use block::Block;
pub use catalog::{BlockSound, CreativeCategory, RenderMethod};
pub use entity::Entity;
pub use error::{AddonError, Result};
pub use item::Item;
pub use manager::{AddonConfig, AddonManager, GenerationReport};
pub use manifest::{Manifest, PackVersion};
pub use namespace::Namespace;
pub use recipe::{Recipe, RecipeIngredient, ShapedRecipe, ShapelessRecipe};
