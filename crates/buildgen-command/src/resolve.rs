// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Catalog resolvers
//!
//! All lookups are exact string matches over the catalog snapshot. A miss
//! is `None`; callers turn it into the matching lookup error at first use,
//! so a missing catalog entry names itself instead of surfacing as a crash
//! deep inside the pipeline.

use buildgen_model::{
    Category, ElementCatalog, FamilyKey, LevelHandle, RoofTypeHandle, SymbolHandle,
};

/// Find a level by exact name
pub fn find_level<D: ElementCatalog + ?Sized>(document: &D, name: &str) -> Option<LevelHandle> {
    document.levels().into_iter().find(|level| level.name == name)
}

/// Find a family symbol by category and exact (type name, family name) key
pub fn find_symbol<D: ElementCatalog + ?Sized>(
    document: &D,
    category: Category,
    key: &FamilyKey,
) -> Option<SymbolHandle> {
    document
        .family_symbols(category)
        .into_iter()
        .find(|symbol| symbol.key.matches(&key.type_name, &key.family_name))
}

/// Find a roof type by exact (type name, family name) key
pub fn find_roof_type<D: ElementCatalog + ?Sized>(
    document: &D,
    key: &FamilyKey,
) -> Option<RoofTypeHandle> {
    document
        .roof_types()
        .into_iter()
        .find(|roof_type| roof_type.key.matches(&key.type_name, &key.family_name))
}
