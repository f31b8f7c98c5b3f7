use super::RecordStore;
use crate::record::{Property, PropertyBag, Record, RecordKey, RecordKind, ScriptAttachment};

/// Typed lookup over a [`RecordStore`].
///
/// A failed lookup is a routing signal, not an error: `resolve_as` returning
/// `None` means "not this kind", and callers try the next kind they accept.
pub struct RecordGraph<'s, S: RecordStore + ?Sized> {
    store: &'s S,
}

impl<S: RecordStore + ?Sized> Clone for RecordGraph<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: RecordStore + ?Sized> Copy for RecordGraph<'_, S> {}

impl<'s, S: RecordStore + ?Sized> RecordGraph<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'s S {
        self.store
    }

    pub fn resolve(&self, key: &RecordKey) -> Option<&'s Record> {
        self.store.resolve(key)
    }

    /// Resolve a key, accepting it only if the record has the given kind
    pub fn resolve_as(&self, key: &RecordKey, kind: RecordKind) -> Option<&'s Record> {
        self.resolve(key).filter(|r| r.kind == kind)
    }

    /// Resolve a key as the first of `kinds` it matches
    pub fn resolve_as_any(&self, key: &RecordKey, kinds: &[RecordKind]) -> Option<&'s Record> {
        let record = self.resolve(key)?;
        kinds
            .iter()
            .find(|&&kind| record.kind == kind)
            .map(|_| record)
    }

    pub fn find_script(&self, record: &'s Record, name: &str) -> Option<&'s ScriptAttachment> {
        record.find_script(name)
    }

    pub fn get_property<'p, B: PropertyBag + ?Sized>(
        &self,
        bag: &'p B,
        name: &str,
    ) -> Option<&'p Property> {
        bag.property(name)
    }

    /// Resolve an object property and require the target to be of `kind`
    pub fn resolve_property<B: PropertyBag + ?Sized>(
        &self,
        bag: &B,
        name: &str,
        kind: RecordKind,
    ) -> Option<&'s Record> {
        bag.object(name).and_then(|key| self.resolve_as(key, kind))
    }

    /// Editor ids of a record's keywords, in keyword order, skipping any that
    /// do not resolve as keywords
    pub fn keyword_editor_ids(&self, record: &Record) -> Vec<&'s str> {
        record
            .keywords
            .iter()
            .filter_map(|k| self.resolve_as(k, RecordKind::Keyword))
            .map(Record::editor_id)
            .collect()
    }

    /// Whether any recipe in the scanned plugin creates `created`
    pub fn is_craftable(&self, created: &RecordKey) -> bool {
        self.store
            .plugin_records(RecordKind::ConstructibleObject)
            .into_iter()
            .filter_map(Record::recipe)
            .any(|recipe| recipe.created_object.as_ref() == Some(created))
    }
}
