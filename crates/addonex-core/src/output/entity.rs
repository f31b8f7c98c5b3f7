use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Fields shared by every exported entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    pub record_key: String,
    pub editor_id: String,
    pub name: String,
    pub description: String,
}

impl BaseItem {
    /// Base fields taken from a record; description stays empty
    pub fn from_record(record: &Record) -> Self {
        Self {
            record_key: record.key.to_string(),
            editor_id: record.editor_id().to_string(),
            name: record.name().to_string(),
            description: String::new(),
        }
    }
}

/// Plugins and other conditions an unlockable depends on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub has_requirements: bool,
    pub plugins: Vec<String>,
    pub has_other_requirements: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPlan {
    #[serde(flatten)]
    pub base: BaseItem,
    pub requirements: Requirements,
    pub is_player_select_only: bool,
    #[serde(rename = "type")]
    pub plot_type: String,
    pub type_sub_class: String,
    pub size: String,
    pub tags: Vec<String>,
    pub level_plans: Vec<BuildingLevelPlan>,
    pub max_level: i64,
    pub max_occupants: i64,
}

impl BuildingPlan {
    pub const DEFAULT_MAX_LEVEL: i64 = 3;
    pub const DEFAULT_MAX_OCCUPANTS: i64 = 1;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingLevelPlan {
    #[serde(flatten)]
    pub base: BaseItem,
    pub level: i64,
    pub max_occupants: i64,
    pub job_titles: Vec<String>,
    pub job_uniform: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPlanSkin {
    #[serde(flatten)]
    pub base: BaseItem,
    pub target_plan: String,
    pub level_skins: Vec<BaseItem>,
    pub is_player_select_only: bool,
    pub tags: Vec<String>,
}

/// Banner and flag variants of a flag theme; each holds the referenced
/// record key, or is empty when the theme lacks that variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFlag {
    #[serde(flatten)]
    pub base: BaseItem,
    pub requirements: Requirements,
    pub flag_waving: String,
    pub flag_down: String,
    pub flag_wall: String,
    pub flag_half_circle_flag01: String,
    pub flag_half_circle_flag02: String,
    pub flag_banner_town_static: String,
    pub flag_banner_town_torn: String,
    pub flag_banner_town_torn_waving: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foundation {
    #[serde(flatten)]
    pub base: BaseItem,
    /// Name in the workshop menu, which may differ from the foundation menu name
    pub workshop_name: String,
    pub craftable: bool,
    pub terraformer: bool,
    pub size: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerPole {
    #[serde(flatten)]
    pub base: BaseItem,
    pub workshop_name: String,
    pub craftable: bool,
    pub height: i32,
    pub has_light: bool,
    pub plot_size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureStoreItem {
    #[serde(flatten)]
    pub base: BaseItem,
    /// Name in the workshop menu, which may differ from the shop inventory name
    pub workshop_name: String,
    pub vendor_level: i64,
    #[serde(rename = "type")]
    pub item_type: FurnitureType,
    pub value: i32,
}

/// What a furniture store recipe builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureType {
    #[default]
    Other,
    FurnitureOther,
    FurnitureBed,
    FurnitureChair,
    FurnitureCityPlannerDesk,
    Static,
    Activator,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStoreCreature {
    #[serde(flatten)]
    pub base: BaseItem,
    pub vendor_level: i64,
    pub value: i32,
}

/// Seven-slot primary attribute vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSpecial {
    pub strength: i32,
    pub perception: i32,
    pub endurance: i32,
    pub charisma: i32,
    pub intelligence: i32,
    pub agility: i32,
    pub luck: i32,
}

impl ActorSpecial {
    pub fn from_slots(slots: [i32; 7]) -> Self {
        let [strength, perception, endurance, charisma, intelligence, agility, luck] = slots;
        Self {
            strength,
            perception,
            endurance,
            charisma,
            intelligence,
            agility,
            luck,
        }
    }

    pub fn slots(&self) -> [i32; 7] {
        [
            self.strength,
            self.perception,
            self.endurance,
            self.charisma,
            self.intelligence,
            self.agility,
            self.luck,
        ]
    }
}

/// Snapshot of the actor behind an unlockable character or leader card.
///
/// When the actor lives in a plugin that is not loaded, only `plugin` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSnapshot {
    #[serde(flatten)]
    pub base: BaseItem,
    pub special: Option<ActorSpecial>,
    pub plugin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockableCharacter {
    #[serde(flatten)]
    pub base: BaseItem,
    pub target_actor: Option<ActorSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderCard {
    #[serde(flatten)]
    pub base: BaseItem,
    pub target_actor: Option<ActorSnapshot>,
    pub major_trait: Option<BaseItem>,
    pub minor_traits: Vec<BaseItem>,
    pub weaknesses: Vec<BaseItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerRecipe {
    #[serde(flatten)]
    pub base: BaseItem,
    pub recipe_name: String,
    pub mash: String,
    pub flavorings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPlan {
    #[serde(flatten)]
    pub base: BaseItem,
    pub max_level: i64,
    pub is_player_select_only: bool,
    #[serde(rename = "supportedNPCs")]
    pub supported_npcs: Vec<i64>,
    pub target_settlement: String,
    pub plugins: Vec<String>,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRepopulationCell {
    #[serde(flatten)]
    pub base: BaseItem,
    pub max_population: i64,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HqRoomConfig {
    #[serde(flatten)]
    pub base: BaseItem,
    pub room_shape: String,
    pub primary_department: String,
    pub upgrade_slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HqRoomUpgrade {
    #[serde(flatten)]
    pub base: BaseItem,
    pub target_upgrade_slot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    #[serde(flatten)]
    pub base: BaseItem,
    pub strength_rating: i64,
    pub ranks: Vec<UnitRank>,
    pub requirements: Requirements,
    pub short_description: String,
    pub default_outfit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRank {
    #[serde(flatten)]
    pub base: BaseItem,
    pub rank: i64,
    pub rank_name: String,
}
