// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and window placement
//!
//! Openings are placed at the midpoint of their host wall's centerline,
//! hosted on both the wall and a level. Symbols are activated on first use;
//! windows additionally get a sill height, doors never do.

use crate::resolve::find_symbol;
use buildgen_model::{
    BuildError, BuiltinParam, Category, ElementId, FamilyKey, HostDocument, LengthUnit,
    LevelHandle, ParamValue, Result, SymbolHandle,
};
use tracing::debug;

/// Resolve a symbol by key and activate it if the host has not yet
fn resolve_active_symbol<D: HostDocument + ?Sized>(
    document: &mut D,
    category: Category,
    key: &FamilyKey,
) -> Result<SymbolHandle> {
    let symbol = find_symbol(&*document, category, key)
        .ok_or_else(|| BuildError::symbol_not_found(category, key.clone()))?;
    if !symbol.is_active {
        document.activate_symbol(symbol.id)?;
        debug!(symbol = %symbol.id, key = %symbol.key, "activated symbol");
    }
    Ok(symbol)
}

/// Place a door at the midpoint of a wall
///
/// # Arguments
/// * `document` - Open-transaction host document
/// * `key` - Door type to place
/// * `wall` - Host wall
/// * `level` - Level the door is associated with
pub fn place_door<D: HostDocument + ?Sized>(
    document: &mut D,
    key: &FamilyKey,
    wall: ElementId,
    level: &LevelHandle,
) -> Result<ElementId> {
    let symbol = resolve_active_symbol(document, Category::Doors, key)?;
    let location = document.wall_centerline(wall)?.midpoint();
    document.place_instance(location, symbol.id, wall, level.id, false)
}

/// Place a window at the midpoint of a wall and set its sill height
///
/// # Arguments
/// * `document` - Open-transaction host document
/// * `key` - Window type to place
/// * `wall` - Host wall
/// * `level` - Level the window is associated with
/// * `sill_height_mm` - Sill height above the level, in millimetres
pub fn place_window<D: HostDocument + ?Sized>(
    document: &mut D,
    key: &FamilyKey,
    wall: ElementId,
    level: &LevelHandle,
    sill_height_mm: f64,
) -> Result<ElementId> {
    let symbol = resolve_active_symbol(document, Category::Windows, key)?;
    let location = document.wall_centerline(wall)?.midpoint();
    let instance = document.place_instance(location, symbol.id, wall, level.id, false)?;
    let sill = document.to_internal(sill_height_mm, LengthUnit::Millimetres);
    document.set_element_param(instance, BuiltinParam::SillHeight, ParamValue::Length(sill))?;
    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::find_level;
    use buildgen_memdoc::{Catalog, DocOp, MemDocument};
    use buildgen_model::{DocumentOps, ElementCatalog, Point3, Segment};

    fn document() -> MemDocument {
        MemDocument::new(
            Catalog::new()
                .with_level("L1", 0.0)
                .with_door("D1", "Doors")
                .with_window("W1", "Windows"),
        )
    }

    fn wall_between(
        doc: &mut MemDocument,
        base: ElementId,
        start: Point3,
        end: Point3,
    ) -> ElementId {
        doc.create_wall(Segment::new(start, end), base, false).unwrap()
    }

    #[test]
    fn test_door_placed_at_wall_midpoint_without_sill() {
        let mut doc = document();
        let base = find_level(&doc, "L1").unwrap();
        doc.begin_transaction("openings").unwrap();
        let wall = wall_between(
            &mut doc,
            base.id,
            Point3::new(-5.0, -2.5, 0.0),
            Point3::new(5.0, -2.5, 0.0),
        );
        let door = place_door(&mut doc, &FamilyKey::new("D1", "Doors"), wall, &base).unwrap();
        doc.commit_transaction().unwrap();

        assert_eq!(doc.instance_host_wall(door), Some(wall));
        assert_eq!(doc.instance_sill_height(door), None);
        let placed = doc
            .journal()
            .iter()
            .find_map(|op| match op {
                DocOp::InstancePlaced { id, location, .. } if *id == door => Some(*location),
                _ => None,
            })
            .unwrap();
        assert_eq!(placed, Point3::new(0.0, -2.5, 0.0));
    }

    #[test]
    fn test_window_sill_converted_to_internal_units() {
        let mut doc = document();
        let base = find_level(&doc, "L1").unwrap();
        doc.begin_transaction("openings").unwrap();
        let wall = wall_between(
            &mut doc,
            base.id,
            Point3::new(5.0, -2.5, 0.0),
            Point3::new(5.0, 2.5, 0.0),
        );
        let window = place_window(&mut doc, &FamilyKey::new("W1", "Windows"), wall, &base, 800.0)
            .unwrap();
        doc.commit_transaction().unwrap();

        assert_eq!(doc.instance_sill_height(window), Some(0.8));
    }

    #[test]
    fn test_symbol_activated_once_across_placements() {
        let mut doc = document();
        let base = find_level(&doc, "L1").unwrap();
        let key = FamilyKey::new("W1", "Windows");
        doc.begin_transaction("openings").unwrap();
        let wall_a = wall_between(
            &mut doc,
            base.id,
            Point3::new(5.0, -2.5, 0.0),
            Point3::new(5.0, 2.5, 0.0),
        );
        let wall_b = wall_between(
            &mut doc,
            base.id,
            Point3::new(-5.0, 2.5, 0.0),
            Point3::new(-5.0, -2.5, 0.0),
        );
        place_window(&mut doc, &key, wall_a, &base, 800.0).unwrap();
        place_window(&mut doc, &key, wall_b, &base, 800.0).unwrap();
        doc.commit_transaction().unwrap();

        let activations = doc
            .journal()
            .iter()
            .filter(|op| matches!(op, DocOp::SymbolActivated { .. }))
            .count();
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_missing_symbol_fails_at_first_use() {
        let mut doc = document();
        let base = find_level(&doc, "L1").unwrap();
        doc.begin_transaction("openings").unwrap();
        let wall = wall_between(
            &mut doc,
            base.id,
            Point3::new(-5.0, -2.5, 0.0),
            Point3::new(5.0, -2.5, 0.0),
        );
        let err = place_door(&mut doc, &FamilyKey::new("nope", "nope"), wall, &base).unwrap_err();
        assert!(matches!(err, BuildError::SymbolNotFound { .. }));
    }
}
