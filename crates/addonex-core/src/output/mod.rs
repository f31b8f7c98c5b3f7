//! Exported data: one [`OutputCollection`] per scanned plugin.

mod entity;

pub use entity::*;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Mod listing details supplied from outside the plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModMetadata {
    pub plugin_file: String,
    pub nexus_id: u32,
    pub name: String,
    pub version: String,
}

impl ModMetadata {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Everything exported from one plugin.
///
/// Lists are append-only and keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputCollection {
    pub name: String,
    pub is_master: bool,
    pub is_light: bool,
    pub masters: Vec<String>,
    pub total_items: u32,
    pub metadata: Option<ModMetadata>,
    pub building_plans: Vec<BuildingPlan>,
    pub building_plan_skins: Vec<BuildingPlanSkin>,
    pub dynamic_flags: Vec<DynamicFlag>,
    pub foundations: Vec<Foundation>,
    pub power_poles: Vec<PowerPole>,
    pub furniture_store_items: Vec<FurnitureStoreItem>,
    pub leader_cards: Vec<LeaderCard>,
    pub pet_store_creatures: Vec<PetStoreCreature>,
    pub unlockable_characters: Vec<UnlockableCharacter>,
    pub beer_recipes: Vec<BeerRecipe>,
    pub city_plans: Vec<CityPlan>,
    pub world_repop_cells: Vec<WorldRepopulationCell>,
    pub hq_room_configs: Vec<HqRoomConfig>,
    pub hq_room_constructions: Vec<HqRoomUpgrade>,
    pub hq_room_upgrades: Vec<HqRoomUpgrade>,
    pub pet_names: Vec<BaseItem>,
    pub unit_types: Vec<UnitType>,
}

impl OutputCollection {
    /// Append a decoded entity to the list `select` picks and count it.
    ///
    /// Returns whether anything was appended.
    pub fn push<T>(&mut self, entity: Option<T>, select: fn(&mut Self) -> &mut Vec<T>) -> bool {
        let Some(entity) = entity else {
            return false;
        };
        select(self).push(entity);
        self.total_items += 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Entry count per list, in output order
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("buildingPlans", self.building_plans.len()),
            ("buildingPlanSkins", self.building_plan_skins.len()),
            ("dynamicFlags", self.dynamic_flags.len()),
            ("foundations", self.foundations.len()),
            ("powerPoles", self.power_poles.len()),
            ("furnitureStoreItems", self.furniture_store_items.len()),
            ("leaderCards", self.leader_cards.len()),
            ("petStoreCreatures", self.pet_store_creatures.len()),
            ("unlockableCharacters", self.unlockable_characters.len()),
            ("beerRecipes", self.beer_recipes.len()),
            ("cityPlans", self.city_plans.len()),
            ("worldRepopCells", self.world_repop_cells.len()),
            ("hqRoomConfigs", self.hq_room_configs.len()),
            ("hqRoomConstructions", self.hq_room_constructions.len()),
            ("hqRoomUpgrades", self.hq_room_upgrades.len()),
            ("petNames", self.pet_names.len()),
            ("unitTypes", self.unit_types.len()),
        ]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the collection as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
