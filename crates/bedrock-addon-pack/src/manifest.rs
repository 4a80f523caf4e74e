//! Pack manifest.json generation and parsing.
//!
//! The resource manifest is built first; the behaviour manifest then carries a
//! single dependency on the resource manifest's header uuid and version, which
//! is what lets the game load the two packs together.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FORMAT_VERSION_MANIFEST;

/// Semantic version as `[major, minor, patch]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackVersion(pub [u32; 3]);

impl PackVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self([major, minor, patch])
    }
}

impl fmt::Display for PackVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch] = self.0;
        write!(f, "{major}.{minor}.{patch}")
    }
}

/// Top-level manifest.json structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Integer (2) or string ("2").
    pub format_version: serde_json::Value,
    pub header: ManifestHeader,
    #[serde(default)]
    pub modules: Vec<ManifestModule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ManifestDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub uuid: String,
    pub version: PackVersion,
    #[serde(default)]
    pub min_engine_version: PackVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: String,
    pub version: PackVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDependency {
    pub uuid: String,
    pub version: PackVersion,
}

impl From<&ManifestHeader> for ManifestDependency {
    fn from(header: &ManifestHeader) -> Self {
        Self {
            uuid: header.uuid.clone(),
            version: header.version,
        }
    }
}

/// What both manifests of an addon share.
#[derive(Debug, Clone, PartialEq)]
pub struct PackInfo {
    pub name: String,
    pub description: String,
    pub version: PackVersion,
    pub min_engine_version: PackVersion,
}

impl Manifest {
    /// Parse a manifest from a JSON string.
    pub fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid manifest.json: {e}"))
    }

    /// Version as a dot-separated string, e.g. "1.0.0".
    pub fn version_string(&self) -> String {
        self.header.version.to_string()
    }

    fn build(info: &PackInfo, pack_label: &str, module_type: &str) -> Self {
        Self {
            format_version: FORMAT_VERSION_MANIFEST.into(),
            header: ManifestHeader {
                name: format!("{} {pack_label}", info.name),
                description: info.description.clone(),
                uuid: random_uuid(),
                version: info.version,
                min_engine_version: info.min_engine_version,
            },
            modules: vec![ManifestModule {
                description: info.description.clone(),
                module_type: module_type.to_string(),
                uuid: random_uuid(),
                version: info.version,
            }],
            dependencies: Vec::new(),
        }
    }
}

/// Build the resource pack manifest with fresh header and module uuids.
pub fn build_resource_manifest(info: &PackInfo) -> Manifest {
    Manifest::build(info, "Resources", "resources")
}

/// Build the behaviour pack manifest, depending on `resource`.
pub fn build_behaviour_manifest(info: &PackInfo, resource: &Manifest) -> Manifest {
    let mut manifest = Manifest::build(info, "Behaviour", "data");
    manifest.dependencies = vec![ManifestDependency::from(&resource.header)];
    manifest
}

/// Random (v4) uuid in hyphenated lowercase form.
fn random_uuid() -> String {
    uuid::Builder::from_random_bytes(rand::random())
        .into_uuid()
        .to_string()
}
