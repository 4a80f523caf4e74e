//! Format versions stamped into generated documents.

/// `format_version` of both pack manifests.
pub const FORMAT_VERSION_MANIFEST: u32 = 2;
pub const FORMAT_VERSION_ITEM: &str = "1.16.100";
pub const FORMAT_VERSION_BLOCK: &str = "1.19.80";
pub const FORMAT_VERSION_RECIPE: &str = "1.12";
pub const FORMAT_VERSION_ENTITY: &str = "1.16.0";
pub const FORMAT_VERSION_ENTITY_CLIENT: &str = "1.10.0";
pub const FORMAT_VERSION_BIOME: &str = "1.13.0";
/// `format_version` header of the resource pack `blocks.json`.
pub const FORMAT_VERSION_BLOCK_SOUND: [u32; 3] = [1, 1, 0];

/// Default pack version written into manifest headers and modules.
pub const DEFAULT_PACK_VERSION: [u32; 3] = [1, 0, 0];
pub const DEFAULT_MIN_ENGINE_VERSION: [u32; 3] = [1, 19, 0];

/// Language file every display name is written to.
pub const DEFAULT_LANGUAGE: &str = "en_US";
