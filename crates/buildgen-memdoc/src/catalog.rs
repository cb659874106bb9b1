// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seedable catalog of levels and family content
//!
//! A [`Catalog`] describes the pre-existing document content a
//! [`MemDocument`](crate::MemDocument) is created with: the levels, the
//! placeable door/window symbols, and the roof types a generator command
//! can look up.

use buildgen_model::FamilyKey;

/// Default wall thickness for created walls, in internal units (metres)
pub const DEFAULT_WALL_THICKNESS: f64 = 0.2;

/// Catalog seed for an in-memory document
#[derive(Clone, Debug)]
pub struct Catalog {
    pub(crate) levels: Vec<(String, f64)>,
    pub(crate) door_symbols: Vec<FamilyKey>,
    pub(crate) window_symbols: Vec<FamilyKey>,
    pub(crate) roof_types: Vec<FamilyKey>,
    pub(crate) wall_thickness: f64,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            door_symbols: Vec::new(),
            window_symbols: Vec::new(),
            roof_types: Vec::new(),
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }

    /// Add a level
    ///
    /// # Arguments
    /// * `name` - Level name, matched exactly by resolvers
    /// * `elevation` - Elevation in internal units
    pub fn with_level(mut self, name: impl Into<String>, elevation: f64) -> Self {
        self.levels.push((name.into(), elevation));
        self
    }

    /// Add a door symbol (seeded inactive, as the host would load it)
    pub fn with_door(
        mut self,
        type_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        self.door_symbols.push(FamilyKey::new(type_name, family_name));
        self
    }

    /// Add a window symbol (seeded inactive)
    pub fn with_window(
        mut self,
        type_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        self.window_symbols
            .push(FamilyKey::new(type_name, family_name));
        self
    }

    /// Add a roof type
    pub fn with_roof_type(
        mut self,
        type_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        self.roof_types.push(FamilyKey::new(type_name, family_name));
        self
    }

    /// Override the thickness created walls report, in internal units
    pub fn with_wall_thickness(mut self, thickness: f64) -> Self {
        self.wall_thickness = thickness;
        self
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
