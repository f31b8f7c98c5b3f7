use serde::{Deserialize, Serialize};

use super::RecordKey;

/// Tagged script property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Property {
    Int(i64),
    Bool(bool),
    String(String),
    ObjectRef(RecordKey),
    Struct(PropertyStruct),
    IntList(Vec<i64>),
    StringList(Vec<String>),
    ObjectRefList(Vec<RecordKey>),
    StructList(Vec<PropertyStruct>),
}

impl Property {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&RecordKey> {
        match self {
            Self::ObjectRef(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&PropertyStruct> {
        match self {
            Self::Struct(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            Self::IntList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object_list(&self) -> Option<&[RecordKey]> {
        match self {
            Self::ObjectRefList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct_list(&self) -> Option<&[PropertyStruct]> {
        match self {
            Self::StructList(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedProperty {
    pub name: String,
    pub value: Property,
}

impl NamedProperty {
    pub fn new(name: impl Into<String>, value: Property) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered, case-insensitive property lookup shared by scripts and structs.
///
/// The first property whose name matches wins. Typed getters return `None`
/// both when the property is absent and when it holds a different variant.
pub trait PropertyBag {
    fn properties(&self) -> &[NamedProperty];

    fn property(&self, name: &str) -> Option<&Property> {
        self.properties()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| &p.value)
    }

    fn property_count(&self) -> usize {
        self.properties().len()
    }

    fn int(&self, name: &str) -> Option<i64> {
        self.property(name).and_then(Property::as_int)
    }

    fn bool(&self, name: &str) -> Option<bool> {
        self.property(name).and_then(Property::as_bool)
    }

    fn string(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(Property::as_str)
    }

    fn object(&self, name: &str) -> Option<&RecordKey> {
        self.property(name).and_then(Property::as_object)
    }

    fn structure(&self, name: &str) -> Option<&PropertyStruct> {
        self.property(name).and_then(Property::as_struct)
    }

    fn int_list(&self, name: &str) -> Option<&[i64]> {
        self.property(name).and_then(Property::as_int_list)
    }

    fn string_list(&self, name: &str) -> Option<&[String]> {
        self.property(name).and_then(Property::as_string_list)
    }

    fn object_list(&self, name: &str) -> Option<&[RecordKey]> {
        self.property(name).and_then(Property::as_object_list)
    }

    fn struct_list(&self, name: &str) -> Option<&[PropertyStruct]> {
        self.property(name).and_then(Property::as_struct_list)
    }
}

/// Named members of a script struct value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyStruct {
    pub members: Vec<NamedProperty>,
}

impl PropertyStruct {
    pub fn new(members: Vec<NamedProperty>) -> Self {
        Self { members }
    }

    /// First member, whatever its name
    pub fn first(&self) -> Option<&Property> {
        self.members.first().map(|m| &m.value)
    }
}

impl PropertyBag for PropertyStruct {
    fn properties(&self) -> &[NamedProperty] {
        &self.members
    }
}

/// A script attached to a record, with its property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptAttachment {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<NamedProperty>,
}

impl ScriptAttachment {
    pub fn new(name: impl Into<String>, properties: Vec<NamedProperty>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Script name with padding stripped and lower-cased, for comparison
    pub fn normalized_name(&self) -> String {
        normalize_script_name(&self.name)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.normalized_name() == normalize_script_name(name)
    }
}

impl PropertyBag for ScriptAttachment {
    fn properties(&self) -> &[NamedProperty] {
        &self.properties
    }
}

/// Strip NUL padding and surrounding whitespace, then lower-case
pub fn normalize_script_name(name: &str) -> String {
    name.trim_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_ascii_lowercase()
}
