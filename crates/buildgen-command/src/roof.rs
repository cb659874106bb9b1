// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gable roof construction
//!
//! The roof is an extrusion: a two-segment gable profile at the top level,
//! swept along the footprint's width axis on a vertical reference plane
//! through the plan origin. Profile and sweep are widened by half a wall
//! thickness so the roof overhangs the wall faces instead of stopping at
//! the centerlines.

use crate::resolve::find_roof_type;
use crate::walls::WallRing;
use buildgen_model::{
    BuildError, ElementId, FamilyKey, GableProfile, HostDocument, LevelHandle, PlaneDef, Point3,
    RectFootprint, Result,
};
use tracing::debug;

/// Build a gable extrusion roof over the wall ring
///
/// # Arguments
/// * `document` - Open-transaction host document
/// * `ring` - Perimeter walls the roof covers
/// * `footprint` - Footprint the walls were built from
/// * `top_level` - Level the roof sits on
/// * `roof_key` - Roof type to resolve from the catalog
/// * `ridge_rise` - Ridge height above the top level, in internal units
pub fn build_gable_roof<D: HostDocument + ?Sized>(
    document: &mut D,
    ring: &WallRing,
    footprint: &RectFootprint,
    top_level: &LevelHandle,
    roof_key: &FamilyKey,
    ridge_rise: f64,
) -> Result<ElementId> {
    let roof_type = find_roof_type(&*document, roof_key)
        .ok_or_else(|| BuildError::RoofTypeNotFound(roof_key.clone()))?;

    // half the wall thickness, so eaves and sweep reach the outer wall faces
    let overhang = document.wall_width(ring.door_wall())? / 2.0;
    let near = -(footprint.half_depth() + overhang);
    let far = footprint.half_depth() + overhang;
    let profile = GableProfile::gable(near, far, top_level.elevation, ridge_rise);

    let plane = document.create_reference_plane(PlaneDef::new(
        Point3::origin(),
        Point3::new(0.0, 0.0, 20.0),
        Point3::new(0.0, 20.0, 0.0),
    ))?;

    let extent = footprint.half_width() + overhang;
    let roof = document.create_extrusion_roof(
        &profile,
        plane,
        top_level.id,
        roof_type.id,
        -extent,
        extent,
    )?;
    debug!(roof = %roof, ridge_z = profile.ridge().z, "created gable roof");
    Ok(roof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::find_level;
    use crate::walls::build_wall_ring;
    use approx::assert_relative_eq;
    use buildgen_memdoc::{Catalog, MemDocument};
    use buildgen_model::DocumentOps;

    fn document() -> MemDocument {
        MemDocument::new(
            Catalog::new()
                .with_level("L1", 0.0)
                .with_level("L2", 4.0)
                .with_roof_type("R1", "Roofs")
                .with_wall_thickness(0.2),
        )
    }

    #[test]
    fn test_roof_overhangs_by_half_wall_thickness() {
        let mut doc = document();
        let base = find_level(&doc, "L1").unwrap();
        let top = find_level(&doc, "L2").unwrap();
        let footprint = RectFootprint::from_dimensions(10.0, 5.0).unwrap();

        doc.begin_transaction("roof").unwrap();
        let ring = build_wall_ring(&mut doc, &footprint, &base, &top).unwrap();
        let roof = build_gable_roof(
            &mut doc,
            &ring,
            &footprint,
            &top,
            &FamilyKey::new("R1", "Roofs"),
            5.0,
        )
        .unwrap();
        doc.commit_transaction().unwrap();

        let (start, end) = doc.roof_extrusion_range(roof).unwrap();
        assert_relative_eq!(start, -5.1);
        assert_relative_eq!(end, 5.1);

        let profile = doc.roof_profile(roof).unwrap();
        assert_relative_eq!(profile.curves()[0].start.y, -2.6);
        assert_relative_eq!(profile.curves()[1].end.y, 2.6);
        assert_relative_eq!(profile.ridge().z, 9.0);
        assert_eq!(doc.reference_planes().len(), 1);
    }

    #[test]
    fn test_missing_roof_type_fails_before_creation() {
        let mut doc = document();
        let base = find_level(&doc, "L1").unwrap();
        let top = find_level(&doc, "L2").unwrap();
        let footprint = RectFootprint::from_dimensions(10.0, 5.0).unwrap();

        doc.begin_transaction("roof").unwrap();
        let ring = build_wall_ring(&mut doc, &footprint, &base, &top).unwrap();
        let err = build_gable_roof(
            &mut doc,
            &ring,
            &footprint,
            &top,
            &FamilyKey::new("nope", "nope"),
            5.0,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::RoofTypeNotFound(_)));
    }
}
