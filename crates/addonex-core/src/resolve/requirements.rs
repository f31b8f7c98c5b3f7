use crate::known::scripts;
use crate::output::Requirements;
use crate::record::{PropertyBag, ScriptAttachment};
use crate::store::{RecordGraph, RecordStore};

/// Resolve the usage requirements an unlockable script points at.
///
/// `has_other_requirements` is inferred from property counts on the nested
/// requirements script: more than one property alongside a plugin list, or a
/// single property that is not a plugin list.
pub fn resolve_requirements<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    script: &ScriptAttachment,
) -> Requirements {
    let Some(key) = script.object("Requirements") else {
        return Requirements::default();
    };

    let mut requirements = Requirements {
        has_requirements: true,
        ..Default::default()
    };

    let Some(nested) = graph
        .resolve(key)
        .and_then(|record| record.find_script(scripts::USAGE_REQUIREMENTS))
    else {
        return requirements;
    };

    requirements.plugins = nested
        .struct_list("RequiredPlugins")
        .unwrap_or_default()
        .iter()
        .flat_map(|s| s.members.iter())
        .filter_map(|m| m.value.as_str())
        .map(str::to_string)
        .collect();

    let count = nested.property_count();
    let found = requirements.plugins.len();
    requirements.has_other_requirements = (count > 1 && found > 0) || (count == 1 && found == 0);

    requirements
}
