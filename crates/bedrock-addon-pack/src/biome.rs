//! Custom biomes (biomes/*.json).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::FORMAT_VERSION_BIOME;
use crate::namespace::Namespace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeFile {
    pub format_version: String,
    #[serde(rename = "minecraft:biome")]
    pub biome: BiomeDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeDefinition {
    pub description: BiomeDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeDescription {
    pub identifier: String,
}

/// A custom biome. Only the identifier is configurable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Biome {
    pub(crate) id: String,
}

impl Biome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn local_id(&self) -> &str {
        &self.id
    }

    pub fn construct(&self, namespace: &Namespace) -> BiomeFile {
        BiomeFile {
            format_version: FORMAT_VERSION_BIOME.to_string(),
            biome: BiomeDefinition {
                description: BiomeDescription {
                    identifier: namespace.qualify(&self.id),
                },
                components: Map::new(),
            },
        }
    }
}
