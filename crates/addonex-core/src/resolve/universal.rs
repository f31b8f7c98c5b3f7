//! Universal references: a struct naming a record either directly through a
//! `BaseForm` object, or indirectly through a plugin name and a numeric id.

use crate::record::{PropertyBag, PropertyStruct, Record, RecordKey};
use crate::store::{RecordGraph, RecordStore};

const DIRECT: &str = "BaseForm";
const PLUGIN_NAME: &str = "sPluginName";
const FORM_ID: &str = "iFormID";

/// Key named by the indirect half of a universal reference
pub fn reconstruct_key_from_indirect(reference: &PropertyStruct) -> Option<RecordKey> {
    let plugin = reference.string(PLUGIN_NAME)?;
    let id = reference.int(FORM_ID)?;
    RecordKey::from_parts(id, plugin)
}

/// Plugin the reference points into, when it is given indirectly
pub fn plugin_name(reference: &PropertyStruct) -> Option<&str> {
    reference.string(PLUGIN_NAME)
}

/// Resolve the direct reference, falling back to the indirect one
pub fn resolve_direct_or_indirect<'s, S: RecordStore + ?Sized>(
    graph: RecordGraph<'s, S>,
    reference: &PropertyStruct,
) -> Option<&'s Record> {
    reference
        .object(DIRECT)
        .and_then(|key| graph.resolve(key))
        .or_else(|| {
            let key = reconstruct_key_from_indirect(reference)?;
            graph.resolve(&key)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NamedProperty, Property, RecordKind};
    use crate::store::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::builder("Addon.esp")
            .record(
                Record::new(RecordKey::new(0x0A1B2C, "Other.esp"), RecordKind::Npc)
                    .with_name("Vera"),
            )
            .build()
            .unwrap()
    }

    fn direct() -> NamedProperty {
        NamedProperty::new(DIRECT, Property::ObjectRef(RecordKey::new(0x0A1B2C, "Other.esp")))
    }

    fn indirect() -> Vec<NamedProperty> {
        vec![
            NamedProperty::new(PLUGIN_NAME, Property::String("Other.esp".to_string())),
            NamedProperty::new(FORM_ID, Property::Int(0x0A1B2C)),
        ]
    }

    #[test]
    fn test_direct_and_indirect_paths_agree() {
        let store = store();
        let graph = RecordGraph::new(&store);

        let by_direct = PropertyStruct::new(vec![direct()]);
        let by_indirect = PropertyStruct::new(indirect());

        let a = resolve_direct_or_indirect(graph, &by_direct).unwrap();
        let b = resolve_direct_or_indirect(graph, &by_indirect).unwrap();
        assert_eq!(a.key, b.key);
        assert_eq!(
            reconstruct_key_from_indirect(&by_indirect),
            by_direct.object(DIRECT).cloned()
        );
    }

    #[test]
    fn test_unresolved_direct_falls_back() {
        let store = store();
        let graph = RecordGraph::new(&store);

        let mut members = vec![NamedProperty::new(
            DIRECT,
            Property::ObjectRef(RecordKey::new(0x999, "Missing.esp")),
        )];
        members.extend(indirect());
        let reference = PropertyStruct::new(members);

        assert_eq!(
            resolve_direct_or_indirect(graph, &reference).map(Record::name),
            Some("Vera")
        );
    }

    #[test]
    fn test_indirect_plugin_name_ignores_case() {
        let store = MemoryStore::builder("Addon.esp")
            .record(
                Record::new(RecordKey::new(0x10, "SS2.esm"), RecordKind::Npc).with_name("Jake"),
            )
            .build()
            .unwrap();
        let graph = RecordGraph::new(&store);

        let reference = PropertyStruct::new(vec![
            NamedProperty::new(PLUGIN_NAME, Property::String("ss2.esm".to_string())),
            NamedProperty::new(FORM_ID, Property::Int(0x10)),
        ]);

        assert_eq!(
            resolve_direct_or_indirect(graph, &reference).map(Record::name),
            Some("Jake")
        );
    }

    #[test]
    fn test_incomplete_indirect_is_none() {
        let reference = PropertyStruct::new(vec![NamedProperty::new(
            PLUGIN_NAME,
            Property::String("Other.esp".to_string()),
        )]);
        assert!(reconstruct_key_from_indirect(&reference).is_none());
        assert_eq!(plugin_name(&reference), Some("Other.esp"));
    }

    #[test]
    fn test_reconstructed_key_renders_fixed_width() {
        let reference = PropertyStruct::new(vec![
            NamedProperty::new(PLUGIN_NAME, Property::String("Addon.esp".to_string())),
            NamedProperty::new(FORM_ID, Property::Int(0x2C)),
        ]);
        let key = reconstruct_key_from_indirect(&reference).unwrap();
        assert_eq!(key.to_string(), "00002C:Addon.esp");
    }
}
