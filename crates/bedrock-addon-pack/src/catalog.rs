//! Closed sets of game identifiers used by the content definitions.

/// Creative inventory tab an item or block is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreativeCategory {
    #[default]
    Construction,
    Equipment,
    Items,
    Nature,
}

impl CreativeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CreativeCategory::Construction => "Construction",
            CreativeCategory::Equipment => "Equipment",
            CreativeCategory::Items => "Items",
            CreativeCategory::Nature => "Nature",
        }
    }
}

/// Sound set a block uses when placed, broken or walked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockSound {
    Amethyst,
    Anvil,
    Bamboo,
    Basalt,
    Bone,
    Cloth,
    Copper,
    Coral,
    Deepslate,
    Glass,
    Grass,
    Gravel,
    HoneyBlock,
    Ladder,
    Metal,
    Mud,
    Netherrack,
    Sand,
    Slime,
    Snow,
    #[default]
    Stone,
    Wood,
}

impl BlockSound {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockSound::Amethyst => "amethyst_block",
            BlockSound::Anvil => "anvil",
            BlockSound::Bamboo => "bamboo",
            BlockSound::Basalt => "basalt",
            BlockSound::Bone => "bone_block",
            BlockSound::Cloth => "cloth",
            BlockSound::Copper => "copper",
            BlockSound::Coral => "coral",
            BlockSound::Deepslate => "deepslate",
            BlockSound::Glass => "glass",
            BlockSound::Grass => "grass",
            BlockSound::Gravel => "gravel",
            BlockSound::HoneyBlock => "honey_block",
            BlockSound::Ladder => "ladder",
            BlockSound::Metal => "metal",
            BlockSound::Mud => "mud",
            BlockSound::Netherrack => "netherrack",
            BlockSound::Sand => "sand",
            BlockSound::Slime => "slime",
            BlockSound::Snow => "snow",
            BlockSound::Stone => "stone",
            BlockSound::Wood => "wood",
        }
    }
}

/// How a block's material is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMethod {
    #[default]
    Blend,
    Opaque,
    /// Binary transparency, e.g. leaves.
    AlphaTest,
}

impl RenderMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMethod::Blend => "blend",
            RenderMethod::Opaque => "opaque",
            RenderMethod::AlphaTest => "alpha_test",
        }
    }
}
