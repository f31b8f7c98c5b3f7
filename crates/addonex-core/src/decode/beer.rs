use super::name_of;
use crate::dispatch::DecoderKey;
use crate::output::{BaseItem, BeerRecipe};
use crate::record::{PropertyBag, Record, RecordKind};
use crate::store::{RecordGraph, RecordStore};

/// Beer recipe book; the entity is named after the beer it brews
pub fn decode_beer_recipe<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    book: &Record,
) -> Option<BeerRecipe> {
    let script = book.find_script(DecoderKey::BeerRecipe.script_name())?;

    let mut base = BaseItem::from_record(book);
    base.name = name_of(graph, script.object("CreatedBeer"), RecordKind::Ingestible);

    let mash = script
        .object("Mash")
        .and_then(|k| graph.resolve(k))
        .map(|r| r.name().to_string())
        .unwrap_or_default();

    let flavorings = script
        .object_list("Flavorings")
        .unwrap_or_default()
        .iter()
        .filter_map(|k| {
            let flavoring = graph.resolve(k)?;
            Some(
                flavoring
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("(Name Missing: {})", k)),
            )
        })
        .collect();

    Some(BeerRecipe {
        base,
        recipe_name: book.name().to_string(),
        mash,
        flavorings,
    })
}
