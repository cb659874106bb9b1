// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host document capability surface
//!
//! These traits define the slice of a host CAD document the generator
//! consumes: typed enumeration of existing elements, creation of walls,
//! openings and roofs from geometric primitives, named parameter sets on
//! created elements, an atomic change scope with explicit begin/commit, and
//! a unit-conversion utility. The host itself is never reimplemented here.

use crate::error::Result;
use crate::geometry::{GableProfile, PlaneDef, Point3, Segment};
use crate::types::{
    BuiltinParam, Category, ElementId, LevelHandle, ParamValue, RoofTypeHandle, SymbolHandle,
};
use crate::units::LengthUnit;

/// Read-only access to catalog content and element attributes
///
/// All lookups are pure reads. A name or key with no match is simply absent
/// from the returned set; callers decide when absence becomes an error.
pub trait ElementCatalog {
    /// Get all levels in the document
    ///
    /// # Returns
    /// Level handles in document order
    fn levels(&self) -> Vec<LevelHandle>;

    /// Get all placeable family symbols of a category
    ///
    /// # Arguments
    /// * `category` - The content category to enumerate
    ///
    /// # Returns
    /// Symbol handles in document order
    fn family_symbols(&self, category: Category) -> Vec<SymbolHandle>;

    /// Get all roof types in the document
    fn roof_types(&self) -> Vec<RoofTypeHandle>;

    /// Get the centerline of a wall's location curve
    ///
    /// # Arguments
    /// * `wall` - The wall element to read
    fn wall_centerline(&self, wall: ElementId) -> Result<Segment>;

    /// Get the thickness of a wall, in internal units
    ///
    /// # Arguments
    /// * `wall` - The wall element to read
    fn wall_width(&self, wall: ElementId) -> Result<f64>;
}

/// Mutating document operations
///
/// All mutations must happen between [`begin_transaction`] and
/// [`commit_transaction`]. Implementations reject mutations outside an open
/// transaction and discard staged changes on [`roll_back_transaction`], so a
/// failed pipeline leaves the document untouched.
///
/// [`begin_transaction`]: DocumentOps::begin_transaction
/// [`commit_transaction`]: DocumentOps::commit_transaction
/// [`roll_back_transaction`]: DocumentOps::roll_back_transaction
pub trait DocumentOps {
    /// Open the atomic change scope
    ///
    /// # Arguments
    /// * `name` - Display name the host shows for the change (e.g. in undo)
    fn begin_transaction(&mut self, name: &str) -> Result<()>;

    /// Commit the open change scope, making staged changes permanent
    fn commit_transaction(&mut self) -> Result<()>;

    /// Discard the open change scope and everything staged inside it
    fn roll_back_transaction(&mut self) -> Result<()>;

    /// Check whether a change scope is currently open
    fn has_open_transaction(&self) -> bool;

    /// Create a straight wall along `line`, based on `base_level`
    ///
    /// # Arguments
    /// * `line` - The wall's location curve
    /// * `base_level` - Level the wall starts from
    /// * `structural` - Whether the wall is load-bearing
    ///
    /// # Returns
    /// The new wall's element ID
    fn create_wall(
        &mut self,
        line: Segment,
        base_level: ElementId,
        structural: bool,
    ) -> Result<ElementId>;

    /// Set a built-in parameter on an element
    ///
    /// The host rejects parameters that do not exist on the target element
    /// and values of the wrong kind.
    fn set_element_param(
        &mut self,
        element: ElementId,
        param: BuiltinParam,
        value: ParamValue,
    ) -> Result<()>;

    /// Activate a family symbol so instances of it can be placed
    ///
    /// Idempotent: activating an already-active symbol is a no-op.
    fn activate_symbol(&mut self, symbol: ElementId) -> Result<()>;

    /// Place a family instance at `location`, hosted on a wall and a level
    ///
    /// # Arguments
    /// * `location` - Placement point, in internal units
    /// * `symbol` - The activated family symbol to instantiate
    /// * `host_wall` - Wall the instance cuts into
    /// * `level` - Level the instance is associated with
    /// * `structural` - Whether the instance is load-bearing
    fn place_instance(
        &mut self,
        location: Point3,
        symbol: ElementId,
        host_wall: ElementId,
        level: ElementId,
        structural: bool,
    ) -> Result<ElementId>;

    /// Create a reference plane from its definition triple
    fn create_reference_plane(&mut self, plane: PlaneDef) -> Result<ElementId>;

    /// Create an extrusion roof
    ///
    /// Sweeps `profile` along the extrusion axis over
    /// `[extrusion_start, extrusion_end]`, supported by `plane`.
    ///
    /// # Arguments
    /// * `profile` - The gable profile to sweep
    /// * `plane` - Supporting reference plane
    /// * `level` - Level the roof is associated with
    /// * `roof_type` - Roof type resolved from the catalog
    /// * `extrusion_start` - Sweep start along the extrusion axis
    /// * `extrusion_end` - Sweep end along the extrusion axis
    #[allow(clippy::too_many_arguments)]
    fn create_extrusion_roof(
        &mut self,
        profile: &GableProfile,
        plane: ElementId,
        level: ElementId,
        roof_type: ElementId,
        extrusion_start: f64,
        extrusion_end: f64,
    ) -> Result<ElementId>;

    /// Internal length units per metre
    ///
    /// Common values:
    /// - 1.0 for a metre-based document
    /// - 1000.0 for millimetres
    /// - 3.2808... for decimal feet
    fn internal_units_per_metre(&self) -> f64;

    /// Convert a real-world length to the document's internal unit
    fn to_internal(&self, value: f64, unit: LengthUnit) -> f64 {
        value * unit.factor_to_metres() * self.internal_units_per_metre()
    }
}

/// Full host document surface consumed by generator commands
pub trait HostDocument: ElementCatalog + DocumentOps {}

// Blanket implementation for any backend providing both halves
impl<T: ElementCatalog + DocumentOps> HostDocument for T {}
