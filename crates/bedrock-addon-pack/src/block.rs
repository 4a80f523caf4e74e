//! Custom blocks (blocks/*.json).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::catalog::{BlockSound, CreativeCategory, RenderMethod};
use crate::constants::FORMAT_VERSION_BLOCK;
use crate::json::number;
use crate::namespace::Namespace;
use crate::recipe::Recipe;

/// Raw block file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockFile {
    pub format_version: String,
    #[serde(rename = "minecraft:block")]
    pub block: BlockDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub description: BlockDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDescription {
    pub identifier: String,
    #[serde(default)]
    pub register_to_creative_menu: bool,
    #[serde(default)]
    pub menu_category: Option<MenuCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: String,
}

impl BlockFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid block JSON: {e}"))
    }
}

/// A custom block definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub(crate) id: String,
    pub(crate) display_name: String,
    /// Falls back to `textures/blocks/{id}` when unset.
    pub(crate) texture_path: Option<String>,
    category: CreativeCategory,
    pub(crate) sound: BlockSound,

    /// Seconds to break by hand.
    hardness: f64,
    /// Explosion resistance.
    resistance: f64,
    render_method: RenderMethod,

    pub(crate) recipe: Option<Recipe>,
}

impl Default for Block {
    fn default() -> Self {
        Self {
            id: "placeholder".into(),
            display_name: "Placeholder".into(),
            texture_path: None,
            category: CreativeCategory::Construction,
            sound: BlockSound::Stone,
            hardness: 1.0,
            resistance: 1.0,
            render_method: RenderMethod::Blend,
            recipe: None,
        }
    }
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn texture_path(mut self, texture_path: impl Into<String>) -> Self {
        self.texture_path = Some(texture_path.into());
        self
    }

    pub fn category(mut self, category: CreativeCategory) -> Self {
        self.category = category;
        self
    }

    pub fn sound(mut self, sound: BlockSound) -> Self {
        self.sound = sound;
        self
    }

    pub fn hardness(mut self, seconds: f64) -> Self {
        self.hardness = seconds;
        self
    }

    pub fn resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn render_method(mut self, render_method: RenderMethod) -> Self {
        self.render_method = render_method;
        self
    }

    /// Attach a crafting recipe producing this block. Its id and result are
    /// forced to this block's current id.
    pub fn recipe(mut self, recipe: impl Into<Recipe>) -> Self {
        self.recipe = Some(recipe.into().bound_to(&self.id));
        self
    }

    pub fn local_id(&self) -> &str {
        &self.id
    }

    pub fn attached_recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Path stored in the terrain texture atlas for this block.
    pub fn atlas_texture(&self) -> String {
        self.texture_path
            .clone()
            .unwrap_or_else(|| format!("textures/blocks/{}", self.id))
    }

    pub fn construct(&self, namespace: &Namespace) -> BlockFile {
        let identifier = namespace.qualify(&self.id);

        let mut components = Map::new();
        components.insert("minecraft:display_name".into(), json!(self.display_name));
        components.insert(
            "minecraft:material_instances".into(),
            json!({
                "*": {
                    "texture": identifier,
                    "render_method": self.render_method.as_str()
                }
            }),
        );
        components.insert(
            "minecraft:destructible_by_mining".into(),
            json!({ "seconds_to_destroy": number(self.hardness) }),
        );
        components.insert(
            "minecraft:destructible_by_explosion".into(),
            json!({ "explosion_resistance": number(self.resistance) }),
        );

        BlockFile {
            format_version: FORMAT_VERSION_BLOCK.to_string(),
            block: BlockDefinition {
                description: BlockDescription {
                    identifier,
                    register_to_creative_menu: true,
                    menu_category: Some(MenuCategory {
                        category: self.category.as_str().to_string(),
                    }),
                },
                components,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{RecipeIngredient, ShapelessRecipe};

    fn ns() -> Namespace {
        Namespace::verbatim("demo")
    }

    #[test]
    fn block_document() {
        let block = Block::new()
            .id("marble")
            .display_name("Marble")
            .category(CreativeCategory::Nature)
            .hardness(2.5)
            .render_method(RenderMethod::Opaque);
        let value = serde_json::to_value(block.construct(&ns())).unwrap();
        let b = &value["minecraft:block"];
        assert_eq!(b["description"]["identifier"], "demo:marble");
        assert_eq!(b["description"]["register_to_creative_menu"], true);
        assert_eq!(b["description"]["menu_category"]["category"], "Nature");
        assert_eq!(b["components"]["minecraft:display_name"], "Marble");
        assert_eq!(
            b["components"]["minecraft:destructible_by_mining"]["seconds_to_destroy"],
            2.5
        );
        assert_eq!(
            b["components"]["minecraft:destructible_by_explosion"]["explosion_resistance"],
            1
        );
        let material = &b["components"]["minecraft:material_instances"]["*"];
        assert_eq!(material["texture"], "demo:marble");
        assert_eq!(material["render_method"], "opaque");
    }

    #[test]
    fn defaults() {
        let block = Block::new();
        assert_eq!(block.local_id(), "placeholder");
        assert_eq!(block.sound, BlockSound::Stone);
        assert_eq!(block.atlas_texture(), "textures/blocks/placeholder");
        let file = block.construct(&ns());
        assert_eq!(
            file.block.components["minecraft:material_instances"]["*"]["render_method"],
            "blend"
        );
    }

    #[test]
    fn attached_recipe_follows_block_id() {
        let block = Block::new().id("leather_block").recipe(
            ShapelessRecipe::new()
                .ingredients(vec![RecipeIngredient::new("minecraft:leather", 9).unwrap()]),
        );
        let recipe = block.attached_recipe().unwrap();
        assert_eq!(recipe.item_id(), "leather_block");
        assert_eq!(recipe.result_item_id(), "leather_block");
    }

    #[test]
    fn written_block_parses_back() {
        let block = Block::new().id("soft").hardness(0.5);
        let text = crate::json::to_pretty_string(&block.construct(&ns())).unwrap();
        let parsed = BlockFile::parse_json(&text).unwrap();
        assert_eq!(parsed, block.construct(&ns()));
        let category = parsed.block.description.menu_category.unwrap();
        assert_eq!(category.category, "Construction");
    }
}
