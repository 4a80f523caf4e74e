//! Custom items (items/*.json).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::catalog::CreativeCategory;
use crate::constants::FORMAT_VERSION_ITEM;
use crate::json::number;
use crate::namespace::Namespace;
use crate::recipe::Recipe;

/// Raw item file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFile {
    pub format_version: String,
    #[serde(rename = "minecraft:item")]
    pub item: ItemDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub description: ItemDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescription {
    pub identifier: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl ItemFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid item JSON: {e}"))
    }
}

/// A custom item definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) id: String,
    pub(crate) display_name: String,
    /// Falls back to `textures/items/{id}` when unset.
    pub(crate) texture_path: Option<String>,
    category: CreativeCategory,
    max_stack_size: u32,
    will_despawn: bool,

    is_food: bool,
    food_bars: u32,
    /// Seconds it takes to consume the item; only emitted for food.
    use_duration: f64,

    enchanted: bool,
    allow_off_hand: bool,

    pub(crate) recipe: Option<Recipe>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: "placeholder".into(),
            display_name: "Placeholder".into(),
            texture_path: None,
            category: CreativeCategory::Construction,
            max_stack_size: 64,
            will_despawn: true,
            is_food: false,
            food_bars: 0,
            use_duration: 5.0,
            enchanted: false,
            allow_off_hand: false,
            recipe: None,
        }
    }
}

impl Item {
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

    pub fn max_stack_size(mut self, max_stack_size: u32) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    pub fn will_despawn(mut self, will_despawn: bool) -> Self {
        self.will_despawn = will_despawn;
        self
    }

    /// Make the item edible, restoring `bars` hunger points.
    pub fn food(mut self, bars: u32) -> Self {
        self.is_food = true;
        self.food_bars = bars;
        self
    }

    pub fn use_duration(mut self, seconds: f64) -> Self {
        self.use_duration = seconds;
        self
    }

    /// Render the item with the enchantment glint.
    pub fn enchanted(mut self) -> Self {
        self.enchanted = true;
        self
    }

    pub fn allow_off_hand(mut self) -> Self {
        self.allow_off_hand = true;
        self
    }

    /// Attach a crafting recipe. Its id and result are forced to this item's
    /// current id, so call this after [`Item::id`].
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

    /// Path stored in the item texture atlas for this item.
    pub fn atlas_texture(&self) -> String {
        self.texture_path
            .clone()
            .unwrap_or_else(|| format!("textures/items/{}", self.id))
    }

    pub fn construct(&self, namespace: &Namespace) -> ItemFile {
        let identifier = namespace.qualify(&self.id);

        let mut components = Map::new();
        components.insert("minecraft:display_name".into(), json!({ "value": self.display_name }));
        components.insert("minecraft:icon".into(), json!({ "texture": identifier }));
        components.insert("minecraft:max_stack_size".into(), json!(self.max_stack_size));
        components.insert("minecraft:foil".into(), json!(self.enchanted));
        components.insert("minecraft:hand_equipped".into(), json!(true));
        components.insert("minecraft:should_despawn".into(), json!(self.will_despawn));
        components.insert("minecraft:allow_off_hand".into(), json!(self.allow_off_hand));

        if self.is_food {
            components.insert("minecraft:use_duration".into(), number(self.use_duration));
            components.insert("minecraft:food".into(), json!({ "nutrition": self.food_bars }));
            components.insert("minecraft:use_animation".into(), json!("eat"));
            components.insert(
                "minecraft:render_offsets".into(),
                json!({
                    "main_hand": {
                        "position": [1, 1, 1],
                        "rotation": [1, 1, 1],
                        "scale": [1, 1, 1]
                    }
                }),
            );
        }

        ItemFile {
            format_version: FORMAT_VERSION_ITEM.to_string(),
            item: ItemDefinition {
                description: ItemDescription {
                    identifier,
                    category: Some(self.category.as_str().to_string()),
                },
                components,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{RecipeIngredient, ShapedRecipe, ShapelessRecipe};

    fn ns() -> Namespace {
        Namespace::verbatim("demo")
    }

    #[test]
    fn food_item_document() {
        let item = Item::new().id("pie").display_name("Pie").food(10);
        let value = serde_json::to_value(item.construct(&ns())).unwrap();
        let item_json = &value["minecraft:item"];
        assert_eq!(value["format_version"], FORMAT_VERSION_ITEM);
        assert_eq!(item_json["description"]["identifier"], "demo:pie");
        assert_eq!(item_json["description"]["category"], "Construction");
        assert_eq!(item_json["components"]["minecraft:food"]["nutrition"], 10);
        assert_eq!(item_json["components"]["minecraft:use_duration"], 5);
        assert_eq!(item_json["components"]["minecraft:use_animation"], "eat");
        assert_eq!(item_json["components"]["minecraft:icon"]["texture"], "demo:pie");
    }

    #[test]
    fn non_food_item_has_no_food_components() {
        let item = Item::new().id("gem").max_stack_size(16);
        let file = item.construct(&ns());
        let comps = &file.item.components;
        assert!(!comps.contains_key("minecraft:food"));
        assert!(!comps.contains_key("minecraft:use_duration"));
        assert!(!comps.contains_key("minecraft:render_offsets"));
        assert_eq!(comps["minecraft:max_stack_size"], 16);
        assert_eq!(comps["minecraft:display_name"]["value"], "Placeholder");
    }

    #[test]
    fn construct_is_repeatable() {
        let item = Item::new()
            .id("pizza")
            .category(CreativeCategory::Nature)
            .food(4)
            .use_duration(1.5)
            .enchanted();
        let a = crate::json::to_pretty_string(&item.construct(&ns())).unwrap();
        let b = crate::json::to_pretty_string(&item.construct(&ns())).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\"minecraft:use_duration\": 1.5"));
    }

    #[test]
    fn attached_recipe_follows_item_id() {
        let item = Item::new().id("pie").recipe(
            ShapelessRecipe::new()
                .item_id("cake")
                .result_item_id("bread")
                .ingredients(vec![RecipeIngredient::single("minecraft:wheat")]),
        );
        let recipe = item.attached_recipe().unwrap();
        assert_eq!(recipe.item_id(), "pie");
        assert_eq!(recipe.result_item_id(), "pie");

        let item = Item::new().id("sword").recipe(ShapedRecipe::new().result_item_id("x"));
        assert_eq!(item.attached_recipe().unwrap().result_item_id(), "sword");
    }

    #[test]
    fn atlas_texture_defaults_to_id() {
        assert_eq!(Item::new().id("pie").atlas_texture(), "textures/items/pie");
        assert_eq!(
            Item::new().id("pie").texture_path("textures/items/apple").atlas_texture(),
            "textures/items/apple"
        );
    }

    #[test]
    fn written_item_parses_back() {
        let item = Item::new().id("ruby").max_stack_size(16);
        let text = crate::json::to_pretty_string(&item.construct(&ns())).unwrap();
        let parsed = ItemFile::parse_json(&text).unwrap();
        assert_eq!(parsed.item.description.identifier, "demo:ruby");
        assert_eq!(parsed.item.components["minecraft:max_stack_size"], 16);
    }
}
