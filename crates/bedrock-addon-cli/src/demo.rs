//! Sample content registered by the binary.

use bedrock_addon_pack::{
    AddonManager, Block, CreativeCategory, Item, RecipeIngredient, Result, ShapelessRecipe,
};

fn food(id: &str, display_name: &str, max_stack_size: u32, bars: u32) -> Item {
    Item::new()
        .id(id)
        .display_name(display_name)
        .category(CreativeCategory::Nature)
        .max_stack_size(max_stack_size)
        .food(bars)
}

/// Register a handful of foods and a craftable block.
pub fn register(manager: &mut AddonManager) -> Result<()> {
    manager.add_items([
        food("pie", "Pie", 5, 10),
        food("pizza", "Pizza", 4, 4),
        food("ice_cream", "Ice Cream", 2, 1),
        food("fanta", "Fanta", 1, 3),
    ]);

    manager.add_block(
        Block::new()
            .id("leather_block")
            .display_name("Leather Block")
            .category(CreativeCategory::Nature)
            .hardness(1.5)
            .texture_path("textures/blocks/stone")
            .recipe(
                ShapelessRecipe::new()
                    .ingredients(vec![RecipeIngredient::new("minecraft:leather", 9)?]),
            ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_addon_pack::AddonConfig;
    use tempfile::TempDir;

    #[test]
    fn demo_addon_generates() {
        let tmp = TempDir::new().unwrap();
        let config = AddonConfig::new("Template Addon", "Demo", tmp.path().join("out"));
        let mut manager = AddonManager::new(config).unwrap();
        register(&mut manager).unwrap();
        let report = manager.generate().unwrap();

        // 4 items, 1 block, 1 recipe.
        assert_eq!(report.documents_written, 6);
        assert_eq!(report.lang_entries, 5);

        let layout = manager.layout();
        assert!(layout.items_dir().join("ice_cream.json").is_file());
        assert!(layout.recipes_dir().join("leather_block.json").is_file());
        let lang = std::fs::read_to_string(layout.lang_file("en_US")).unwrap();
        assert!(lang.starts_with("item.template_addon:pie.name=Pie\n"));
        assert!(lang.ends_with("tile.template_addon:leather_block.name=Leather Block"));
    }
}
