//! Per-struct key-to-field lookup tables, built once per type.

use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;
use std::collections::HashMap;
use std::sync::LazyLock;

use mapshape_core::{Shape, StructDef};
use parking_lot::RwLock;

use crate::FieldMatching;

/// How a key found its field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MatchKind {
    Exact,
    Folded,
}

/// Name-to-index tables for one struct.
#[derive(Debug)]
pub(crate) struct FieldLookup {
    exact: HashMap<&'static str, usize>,
    folded: HashMap<String, usize>,
}

impl FieldLookup {
    fn build(def: &StructDef) -> Self {
        let mut exact = HashMap::with_capacity(def.fields.len());
        let mut folded = HashMap::with_capacity(def.fields.len());
        // first-declared wins on collisions
        for (index, field) in def.fields.iter().enumerate() {
            exact.entry(field.name).or_insert(index);
            folded.entry(field.name.to_lowercase()).or_insert(index);
        }
        Self { exact, folded }
    }

    /// Finds the field `key` refers to.
    pub(crate) fn resolve(&self, key: &str, matching: FieldMatching) -> Option<(usize, MatchKind)> {
        if let Some(&index) = self.exact.get(key) {
            return Some((index, MatchKind::Exact));
        }
        match matching {
            FieldMatching::Exact => None,
            FieldMatching::CaseInsensitive => self
                .folded
                .get(&key.to_lowercase())
                .map(|&index| (index, MatchKind::Folded)),
        }
    }
}

static LOOKUPS: LazyLock<RwLock<HashMap<TypeId, Arc<FieldLookup>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The lookup table for the struct described by `shape`.
pub(crate) fn field_lookup(shape: &'static Shape, def: &StructDef) -> Arc<FieldLookup> {
    let id = shape.type_id();
    if let Some(lookup) = LOOKUPS.read().get(&id) {
        return Arc::clone(lookup);
    }

    let built = Arc::new(FieldLookup::build(def));
    Arc::clone(LOOKUPS.write().entry(id).or_insert(built))
}
