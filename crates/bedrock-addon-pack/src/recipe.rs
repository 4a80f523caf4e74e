//! Crafting recipes (recipes/*.json).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::FORMAT_VERSION_RECIPE;
use crate::error::{AddonError, Result};
use crate::namespace::Namespace;

const CRAFTING_TABLE_TAG: &str = "crafting_table";

/// A recipe file holds either a shaped or a shapeless recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeFile {
    pub format_version: String,
    #[serde(
        rename = "minecraft:recipe_shaped",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shaped: Option<ShapedRecipeDef>,
    #[serde(
        rename = "minecraft:recipe_shapeless",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shapeless: Option<ShapelessRecipeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedRecipeDef {
    pub description: RecipeDescription,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pattern rows, e.g. `["ABA", " C ", " C "]`.
    pub pattern: Vec<String>,
    /// Mapping of pattern characters to items.
    pub key: BTreeMap<String, RecipeKeyItem>,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapelessRecipeDef {
    pub description: RecipeDescription,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ingredients: Vec<IngredientEntry>,
    pub result: RecipeResultItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDescription {
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeKeyItem {
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub item: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResultItem {
    pub item: String,
}

impl RecipeFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid recipe JSON: {e}"))
    }
}

/// One input of a shapeless recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    item_id: String,
    count: u32,
}

impl RecipeIngredient {
    /// `item_id` is used verbatim (e.g. `minecraft:leather`); `count` must be at least 1.
    pub fn new(item_id: impl Into<String>, count: u32) -> Result<Self> {
        let item_id = item_id.into();
        if count == 0 {
            return Err(AddonError::InvalidIngredientCount { item_id, count });
        }
        Ok(Self { item_id, count })
    }

    /// A single unit of `item_id`.
    pub fn single(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            count: 1,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    fn construct(&self) -> IngredientEntry {
        IngredientEntry {
            item: self.item_id.clone(),
            count: self.count,
        }
    }
}

/// Recipe crafted on a crafting table following a fixed grid pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedRecipe {
    pub(crate) item_id: String,
    pattern: Vec<String>,
    key: BTreeMap<char, String>,
    pub(crate) result_item_id: String,
}

impl ShapedRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local id of the item or block this recipe belongs to.
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = item_id.into();
        self
    }

    pub fn pattern<I, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pattern = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Map a pattern symbol to a fully-qualified item id.
    pub fn key(mut self, symbol: char, item: impl Into<String>) -> Self {
        self.key.insert(symbol, item.into());
        self
    }

    /// Local id of the crafted item. Defaults to the recipe's own id.
    pub fn result_item_id(mut self, result_item_id: impl Into<String>) -> Self {
        self.result_item_id = result_item_id.into();
        self
    }

    pub fn construct(&self, namespace: &Namespace) -> RecipeFile {
        let key = self
            .key
            .iter()
            .map(|(symbol, item)| (symbol.to_string(), RecipeKeyItem { item: item.clone() }))
            .collect();
        RecipeFile {
            format_version: FORMAT_VERSION_RECIPE.to_string(),
            shaped: Some(ShapedRecipeDef {
                description: RecipeDescription {
                    identifier: namespace.qualify(&self.item_id),
                },
                tags: vec![CRAFTING_TABLE_TAG.to_string()],
                pattern: self.pattern.clone(),
                key,
                result: namespace.qualify(result_or_own_id(&self.result_item_id, &self.item_id)),
            }),
            shapeless: None,
        }
    }
}

/// Recipe crafted from an unordered list of ingredients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapelessRecipe {
    pub(crate) item_id: String,
    ingredients: Vec<RecipeIngredient>,
    pub(crate) result_item_id: String,
}

impl ShapelessRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local id of the item or block this recipe belongs to.
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = item_id.into();
        self
    }

    pub fn ingredients(mut self, ingredients: Vec<RecipeIngredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Local id of the crafted item. Defaults to the recipe's own id.
    pub fn result_item_id(mut self, result_item_id: impl Into<String>) -> Self {
        self.result_item_id = result_item_id.into();
        self
    }

    pub fn construct(&self, namespace: &Namespace) -> RecipeFile {
        RecipeFile {
            format_version: FORMAT_VERSION_RECIPE.to_string(),
            shaped: None,
            shapeless: Some(ShapelessRecipeDef {
                description: RecipeDescription {
                    identifier: namespace.qualify(&self.item_id),
                },
                tags: vec![CRAFTING_TABLE_TAG.to_string()],
                ingredients: self.ingredients.iter().map(RecipeIngredient::construct).collect(),
                result: RecipeResultItem {
                    item: namespace.qualify(result_or_own_id(&self.result_item_id, &self.item_id)),
                },
            }),
        }
    }
}

// An unset result crafts the recipe's own item.
fn result_or_own_id<'a>(result_item_id: &'a str, item_id: &'a str) -> &'a str {
    if result_item_id.is_empty() {
        item_id
    } else {
        result_item_id
    }
}

/// Either kind of crafting recipe.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
}

impl Recipe {
    /// Local id the recipe file is named after.
    pub fn item_id(&self) -> &str {
        match self {
            Recipe::Shaped(r) => &r.item_id,
            Recipe::Shapeless(r) => &r.item_id,
        }
    }

    /// Local id of the crafted item.
    pub fn result_item_id(&self) -> &str {
        match self {
            Recipe::Shaped(r) => result_or_own_id(&r.result_item_id, &r.item_id),
            Recipe::Shapeless(r) => result_or_own_id(&r.result_item_id, &r.item_id),
        }
    }

    /// Force both the recipe id and its result to `owner_id`.
    pub(crate) fn bound_to(mut self, owner_id: &str) -> Self {
        let (item_id, result_item_id) = match &mut self {
            Recipe::Shaped(r) => (&mut r.item_id, &mut r.result_item_id),
            Recipe::Shapeless(r) => (&mut r.item_id, &mut r.result_item_id),
        };
        *item_id = owner_id.to_string();
        *result_item_id = owner_id.to_string();
        self
    }

    pub fn construct(&self, namespace: &Namespace) -> RecipeFile {
        match self {
            Recipe::Shaped(r) => r.construct(namespace),
            Recipe::Shapeless(r) => r.construct(namespace),
        }
    }
}

impl From<ShapedRecipe> for Recipe {
    fn from(recipe: ShapedRecipe) -> Self {
        Recipe::Shaped(recipe)
    }
}

impl From<ShapelessRecipe> for Recipe {
    fn from(recipe: ShapelessRecipe) -> Self {
        Recipe::Shapeless(recipe)
    }
}
