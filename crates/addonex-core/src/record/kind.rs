use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Schema tag of a record
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RecordKind {
    MiscItem,
    Weapon,
    Armor,
    Book,
    Quest,
    Keyword,
    FormList,
    Npc,
    Spell,
    MagicEffect,
    Race,
    Class,
    Message,
    Activator,
    Static,
    StaticCollection,
    PlacedObject,
    Global,
    Furniture,
    Outfit,
    WeaponModification,
    ConstructibleObject,
    Light,
    Ingestible,
}
