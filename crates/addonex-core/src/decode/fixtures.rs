//! Record builders shared by the decoder tests.

use crate::record::{
    NamedProperty, ObjectBounds, Point3, Property, PropertyStruct, Record, RecordData, RecordKey,
    RecordKind, ScriptAttachment,
};

pub const PLUGIN: &str = "Addon.esp";

pub fn key(id: u32) -> RecordKey {
    RecordKey::new(id, PLUGIN)
}

pub fn keyword(id: u32, editor_id: &str) -> Record {
    Record::new(key(id), RecordKind::Keyword).with_editor_id(editor_id)
}

pub fn misc(id: u32, editor_id: &str) -> Record {
    Record::new(key(id), RecordKind::MiscItem).with_editor_id(editor_id)
}

pub fn named(id: u32, kind: RecordKind, name: &str) -> Record {
    Record::new(key(id), kind).with_name(name)
}

pub fn bounded(id: u32, kind: RecordKind, extents: (i32, i32, i32)) -> Record {
    Record::new(key(id), kind).with_data(RecordData::Bounded {
        bounds: ObjectBounds::new(
            Point3::default(),
            Point3::new(extents.0, extents.1, extents.2),
        ),
    })
}

pub fn form_list(id: u32, items: &[RecordKey]) -> Record {
    Record::new(key(id), RecordKind::FormList).with_data(RecordData::FormList {
        items: items.to_vec(),
    })
}

pub fn script(name: &str, properties: Vec<NamedProperty>) -> ScriptAttachment {
    ScriptAttachment::new(name, properties)
}

pub fn object(name: &str, target: RecordKey) -> NamedProperty {
    NamedProperty::new(name, Property::ObjectRef(target))
}

pub fn objects(name: &str, targets: &[RecordKey]) -> NamedProperty {
    NamedProperty::new(name, Property::ObjectRefList(targets.to_vec()))
}

pub fn int(name: &str, value: i64) -> NamedProperty {
    NamedProperty::new(name, Property::Int(value))
}

pub fn boolean(name: &str, value: bool) -> NamedProperty {
    NamedProperty::new(name, Property::Bool(value))
}

pub fn string(name: &str, value: &str) -> NamedProperty {
    NamedProperty::new(name, Property::String(value.to_string()))
}

pub fn structure(name: &str, members: Vec<NamedProperty>) -> NamedProperty {
    NamedProperty::new(name, Property::Struct(PropertyStruct::new(members)))
}

pub fn structs(name: &str, items: Vec<Vec<NamedProperty>>) -> NamedProperty {
    NamedProperty::new(
        name,
        Property::StructList(items.into_iter().map(PropertyStruct::new).collect()),
    )
}
