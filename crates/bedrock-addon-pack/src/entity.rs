//! Custom entities: server-side definition (entities/*.json) and client
//! definition (entity/*.entity.json).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::constants::{FORMAT_VERSION_ENTITY, FORMAT_VERSION_ENTITY_CLIENT};
use crate::manifest::PackVersion;
use crate::namespace::Namespace;

/// Raw entity file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFile {
    pub format_version: String,
    #[serde(rename = "minecraft:entity")]
    pub entity: EntityDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub description: EntityDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescription {
    pub identifier: String,
    #[serde(default)]
    pub is_spawnable: bool,
    #[serde(default)]
    pub is_summonable: bool,
}

/// Client entity file structure (resource pack side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntityFile {
    pub format_version: String,
    #[serde(rename = "minecraft:client_entity")]
    pub client_entity: ClientEntityDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntityDefinition {
    pub description: ClientEntityDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntityDescription {
    pub identifier: String,
    /// Dotted version string, e.g. `1.19.0`.
    pub min_engine_version: String,
    pub materials: BTreeMap<String, String>,
    pub textures: BTreeMap<String, String>,
    pub enable_attachables: bool,
    pub geometry: BTreeMap<String, String>,
    pub animations: BTreeMap<String, String>,
    pub animation_controllers: Vec<BTreeMap<String, String>>,
    pub render_controllers: Vec<String>,
    pub spawn_egg: SpawnEgg,
}

/// Spawn egg appearance: an item texture or a pair of colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpawnEgg {
    Texture { texture: String, texture_index: u32 },
    Colors { base_color: String, overlay_color: String },
}

/// A custom entity definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub(crate) id: String,
    pub(crate) name: String,
    textures: BTreeMap<String, String>,

    egg_texture: Option<String>,
    egg_base_color: String,
    egg_overlay_color: String,

    can_wear_armor: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            textures: string_map([("default", "textures/entity/steve")]),
            egg_texture: None,
            egg_base_color: "#000000".into(),
            egg_overlay_color: "#ffff00".into(),
            can_wear_armor: true,
        }
    }
}

fn string_map<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set or replace a named texture, e.g. `("default", "textures/entity/guard")`.
    pub fn texture(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.textures.insert(key.into(), path.into());
        self
    }

    /// Use an item texture for the spawn egg instead of the two colours.
    pub fn egg_texture(mut self, texture: impl Into<String>) -> Self {
        self.egg_texture = Some(texture.into());
        self
    }

    pub fn egg_base_color(mut self, hex_color: impl Into<String>) -> Self {
        self.egg_base_color = hex_color.into();
        self
    }

    pub fn egg_overlay_color(mut self, hex_color: impl Into<String>) -> Self {
        self.egg_overlay_color = hex_color.into();
        self
    }

    pub fn can_wear_armor(mut self, value: bool) -> Self {
        self.can_wear_armor = value;
        self
    }

    pub fn local_id(&self) -> &str {
        &self.id
    }

    /// Behaviour pack document.
    pub fn construct_behaviour(&self, namespace: &Namespace) -> EntityFile {
        let mut components = Map::new();
        components.insert("minecraft:type_family".into(), json!({ "family": ["player"] }));
        components.insert("minecraft:collision_box".into(), json!({ "width": 0.6, "height": 1.8 }));

        EntityFile {
            format_version: FORMAT_VERSION_ENTITY.to_string(),
            entity: EntityDefinition {
                description: EntityDescription {
                    identifier: namespace.qualify(&self.id),
                    is_spawnable: true,
                    is_summonable: true,
                },
                components,
            },
        }
    }

    /// Resource pack (client) document.
    pub fn construct_resource(
        &self,
        namespace: &Namespace,
        min_engine_version: PackVersion,
    ) -> ClientEntityFile {
        let spawn_egg = match &self.egg_texture {
            Some(texture) => SpawnEgg::Texture {
                texture: texture.clone(),
                texture_index: 0,
            },
            None => SpawnEgg::Colors {
                base_color: self.egg_base_color.clone(),
                overlay_color: self.egg_overlay_color.clone(),
            },
        };

        ClientEntityFile {
            format_version: FORMAT_VERSION_ENTITY_CLIENT.to_string(),
            client_entity: ClientEntityDefinition {
                description: ClientEntityDescription {
                    identifier: namespace.qualify(&self.id),
                    min_engine_version: min_engine_version.to_string(),
                    materials: string_map([("default", "player")]),
                    textures: self.textures.clone(),
                    enable_attachables: self.can_wear_armor,
                    geometry: string_map([("default", "geometry.pig.v1.8")]),
                    animations: string_map([
                        ("walk", "animation.quadruped.walk"),
                        ("look_at_target", "animation.common.look_at_target"),
                    ]),
                    animation_controllers: vec![
                        string_map([("setup", "controller.animation.pig.setup")]),
                        string_map([("move", "controller.animation.pig.move")]),
                        string_map([("baby", "controller.animation.pig.baby")]),
                    ],
                    render_controllers: vec!["controller.render.default".to_string()],
                    spawn_egg,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns() -> Namespace {
        Namespace::verbatim("demo")
    }

    #[test]
    fn behaviour_document() {
        let entity = Entity::new().id("guard").name("Guard");
        let file = entity.construct_behaviour(&ns());
        assert_eq!(file.format_version, FORMAT_VERSION_ENTITY);
        assert_eq!(file.entity.description.identifier, "demo:guard");
        assert!(file.entity.description.is_spawnable);
        assert!(file.entity.description.is_summonable);
        assert_eq!(file.entity.components["minecraft:collision_box"]["width"], 0.6);
        assert_eq!(file.entity.components["minecraft:collision_box"]["height"], 1.8);
    }

    #[test]
    fn resource_document_uses_egg_colours_by_default() {
        let entity = Entity::new().id("guard").can_wear_armor(false);
        let value = serde_json::to_value(
            entity.construct_resource(&ns(), PackVersion::new(1, 19, 0)),
        )
        .unwrap();
        let desc = &value["minecraft:client_entity"]["description"];
        assert_eq!(desc["identifier"], "demo:guard");
        assert_eq!(desc["min_engine_version"], "1.19.0");
        assert_eq!(desc["textures"]["default"], "textures/entity/steve");
        assert_eq!(desc["enable_attachables"], false);
        assert_eq!(desc["spawn_egg"]["base_color"], "#000000");
        assert_eq!(desc["spawn_egg"]["overlay_color"], "#ffff00");
        assert!(desc["spawn_egg"].get("texture").is_none());
        assert_eq!(desc["animation_controllers"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn egg_texture_replaces_colours() {
        let entity = Entity::new()
            .id("guard")
            .texture("default", "textures/entity/guard")
            .egg_texture("guard_egg");
        let file = entity.construct_resource(&ns(), PackVersion::new(1, 20, 0));
        let desc = &file.client_entity.description;
        assert_eq!(desc.textures["default"], "textures/entity/guard");
        assert_eq!(
            desc.spawn_egg,
            SpawnEgg::Texture {
                texture: "guard_egg".into(),
                texture_index: 0
            }
        );
    }

    #[test]
    fn written_documents_deserialize() {
        let entity = Entity::new().id("guard");
        let behaviour = crate::json::to_pretty_string(&entity.construct_behaviour(&ns())).unwrap();
        let parsed: EntityFile = serde_json::from_str(&behaviour).unwrap();
        assert_eq!(parsed.entity.description.identifier, "demo:guard");

        let resource = entity.construct_resource(&ns(), PackVersion::new(1, 19, 0));
        let text = crate::json::to_pretty_string(&resource).unwrap();
        let parsed: ClientEntityFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, resource);
    }
}
