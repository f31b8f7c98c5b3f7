use serde::{Deserialize, Serialize};

use super::{PropertyBag, RecordKey, RecordKind, ScriptAttachment, normalize_script_name};

/// A node of the record store.
///
/// Cross-references are always [`RecordKey`]s and are resolved on demand
/// through a [`crate::store::RecordStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: RecordKey,
    pub kind: RecordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<RecordKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<ScriptAttachment>,
    #[serde(default)]
    pub data: RecordData,
}

/// Kind-specific payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RecordData {
    #[default]
    None,
    FormList {
        items: Vec<RecordKey>,
    },
    Quest {
        #[serde(default)]
        start_game_enabled: bool,
    },
    Npc(NpcData),
    /// Race and class attribute bonuses
    ActorValues {
        values: Vec<ActorValueEntry>,
    },
    Spell {
        effects: Vec<SpellEffect>,
    },
    MagicEffect {
        #[serde(default)]
        actor_value: Option<RecordKey>,
    },
    Bounded {
        bounds: ObjectBounds,
    },
    PlacedObject {
        #[serde(default)]
        base: Option<RecordKey>,
    },
    Outfit {
        items: Vec<RecordKey>,
    },
    MiscItem {
        #[serde(default)]
        value: i32,
    },
    ConstructibleObject(RecipeData),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpcData {
    #[serde(default)]
    pub race: Option<RecordKey>,
    #[serde(default)]
    pub class: Option<RecordKey>,
    #[serde(default)]
    pub actor_values: Vec<ActorValueEntry>,
    #[serde(default)]
    pub spells: Vec<RecordKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorValueEntry {
    pub actor_value: RecordKey,
    pub value: f32,
}

impl ActorValueEntry {
    pub fn new(actor_value: RecordKey, value: f32) -> Self {
        Self { actor_value, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellEffect {
    pub base_effect: RecordKey,
    #[serde(default)]
    pub magnitude: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Two opposite corners of an object's bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectBounds {
    pub first: Point3,
    pub second: Point3,
}

impl ObjectBounds {
    pub fn new(first: Point3, second: Point3) -> Self {
        Self { first, second }
    }
}

/// Crafting recipe payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    #[serde(default)]
    pub created_object: Option<RecordKey>,
    #[serde(default)]
    pub components: Vec<RecipeComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeComponent {
    pub component: RecordKey,
    pub count: u32,
}

impl Record {
    pub fn new(key: RecordKey, kind: RecordKind) -> Self {
        Self {
            key,
            kind,
            editor_id: None,
            name: None,
            description: None,
            keywords: Vec::new(),
            scripts: Vec::new(),
            data: RecordData::None,
        }
    }

    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keyword(mut self, keyword: RecordKey) -> Self {
        self.keywords.push(keyword);
        self
    }

    pub fn with_script(mut self, script: ScriptAttachment) -> Self {
        self.scripts.push(script);
        self
    }

    pub fn with_data(mut self, data: RecordData) -> Self {
        self.data = data;
        self
    }

    pub fn editor_id(&self) -> &str {
        self.editor_id.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn has_keyword(&self, keyword: &RecordKey) -> bool {
        self.keywords.contains(keyword)
    }

    /// Find an attached script by name.
    ///
    /// Comparison ignores case and NUL padding. Scripts without any property
    /// values carry no data and are never returned.
    pub fn find_script(&self, name: &str) -> Option<&ScriptAttachment> {
        let wanted = normalize_script_name(name);
        self.scripts
            .iter()
            .find(|s| s.property_count() > 0 && s.normalized_name() == wanted)
    }

    pub fn form_list_items(&self) -> &[RecordKey] {
        match &self.data {
            RecordData::FormList { items } => items,
            _ => &[],
        }
    }

    pub fn is_start_game_enabled(&self) -> bool {
        matches!(
            self.data,
            RecordData::Quest {
                start_game_enabled: true
            }
        )
    }

    pub fn npc(&self) -> Option<&NpcData> {
        match &self.data {
            RecordData::Npc(npc) => Some(npc),
            _ => None,
        }
    }

    pub fn actor_values(&self) -> &[ActorValueEntry] {
        match &self.data {
            RecordData::ActorValues { values } => values,
            RecordData::Npc(npc) => &npc.actor_values,
            _ => &[],
        }
    }

    pub fn spell_effects(&self) -> &[SpellEffect] {
        match &self.data {
            RecordData::Spell { effects } => effects,
            _ => &[],
        }
    }

    pub fn effect_actor_value(&self) -> Option<&RecordKey> {
        match &self.data {
            RecordData::MagicEffect { actor_value } => actor_value.as_ref(),
            _ => None,
        }
    }

    pub fn bounds(&self) -> Option<&ObjectBounds> {
        match &self.data {
            RecordData::Bounded { bounds } => Some(bounds),
            _ => None,
        }
    }

    pub fn placed_base(&self) -> Option<&RecordKey> {
        match &self.data {
            RecordData::PlacedObject { base } => base.as_ref(),
            _ => None,
        }
    }

    pub fn outfit_items(&self) -> &[RecordKey] {
        match &self.data {
            RecordData::Outfit { items } => items,
            _ => &[],
        }
    }

    /// Vendor value of a misc item, zero for everything else
    pub fn value(&self) -> i32 {
        match &self.data {
            RecordData::MiscItem { value } => *value,
            _ => 0,
        }
    }

    pub fn recipe(&self) -> Option<&RecipeData> {
        match &self.data {
            RecordData::ConstructibleObject(recipe) => Some(recipe),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NamedProperty, Property};

    #[test]
    fn test_find_script_skips_empty_attachments() {
        let record = Record::new(RecordKey::new(1, "A.esp"), RecordKind::MiscItem)
            .with_script(ScriptAttachment::new("Addon:Thing", vec![]))
            .with_script(ScriptAttachment::new(
                "addon:thing\0",
                vec![NamedProperty::new("iValue", Property::Int(7))],
            ));

        let script = record.find_script("Addon:Thing").unwrap();
        assert_eq!(script.int("iValue"), Some(7));
        assert!(record.find_script("Addon:Other").is_none());
    }

    #[test]
    fn test_payload_accessors_fail_soft() {
        let record = Record::new(RecordKey::new(2, "A.esp"), RecordKind::Weapon);
        assert!(record.form_list_items().is_empty());
        assert!(record.bounds().is_none());
        assert!(record.npc().is_none());
        assert_eq!(record.value(), 0);
        assert_eq!(record.name(), "");
        assert!(!record.is_start_game_enabled());
    }

    #[test]
    fn test_record_json_defaults() {
        let record: Record = serde_json::from_value(serde_json::json!({
            "key": "000003:A.esp",
            "kind": "form-list",
            "data": {"type": "form-list", "items": ["000004:A.esp"]}
        }))
        .unwrap();
        assert_eq!(record.kind, RecordKind::FormList);
        assert_eq!(record.form_list_items(), &[RecordKey::new(4, "A.esp")]);
        assert!(record.keywords.is_empty());
    }
}
