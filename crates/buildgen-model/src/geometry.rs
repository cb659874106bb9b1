// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry primitives for wall layout and roof profiles
//!
//! Everything here is transient request-scoped data handed to the host; the
//! host owns whatever geometry it materializes from these descriptions.

use crate::error::{BuildError, Result};

/// 3D point in the document's internal unit
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector in the document's internal unit
pub type Vector3 = nalgebra::Vector3<f64>;

/// Bounded straight line segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point
    pub start: Point3,
    /// End point
    pub end: Point3,
}

impl Segment {
    /// Create a bounded segment between two points
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Check whether the segment collapses to a point
    pub fn is_degenerate(&self) -> bool {
        self.length() <= f64::EPSILON
    }
}

/// Rectangular building footprint centered at the plan origin
///
/// Stores half-extents. The corner loop runs counter-clockwise starting at
/// the (-half_width, -half_depth) corner, so the first edge is the south
/// edge and edges follow in south, east, north, west order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectFootprint {
    half_width: f64,
    half_depth: f64,
}

impl RectFootprint {
    /// Create a footprint from overall width and depth
    ///
    /// # Arguments
    /// * `width` - Overall extent along X, in internal units (must be positive)
    /// * `depth` - Overall extent along Y, in internal units (must be positive)
    pub fn from_dimensions(width: f64, depth: f64) -> Result<Self> {
        if !(width > 0.0) || !(depth > 0.0) {
            return Err(BuildError::invalid_geometry(format!(
                "footprint dimensions must be positive (got {width} x {depth})"
            )));
        }
        Ok(Self {
            half_width: width / 2.0,
            half_depth: depth / 2.0,
        })
    }

    /// Half-extent along X
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Half-extent along Y
    pub fn half_depth(&self) -> f64 {
        self.half_depth
    }

    /// Overall extent along X
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Overall extent along Y
    pub fn depth(&self) -> f64 {
        self.half_depth * 2.0
    }

    /// Five corner points closing the rectangle (last repeats the first)
    pub fn corner_loop(&self) -> [Point3; 5] {
        let (dx, dy) = (self.half_width, self.half_depth);
        [
            Point3::new(-dx, -dy, 0.0),
            Point3::new(dx, -dy, 0.0),
            Point3::new(dx, dy, 0.0),
            Point3::new(-dx, dy, 0.0),
            Point3::new(-dx, -dy, 0.0),
        ]
    }

    /// Four boundary edges, consumed pairwise from the corner loop
    ///
    /// Order is south, east, north, west (counter-clockwise).
    pub fn edges(&self) -> [Segment; 4] {
        let corners = self.corner_loop();
        [
            Segment::new(corners[0], corners[1]),
            Segment::new(corners[1], corners[2]),
            Segment::new(corners[2], corners[3]),
            Segment::new(corners[3], corners[4]),
        ]
    }
}

/// Gable roof profile: two segments rising to a shared ridge
///
/// The profile lives in the X = 0 plane and is swept along X by the host
/// when it builds the extrusion roof.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GableProfile {
    curves: [Segment; 2],
}

impl GableProfile {
    /// Build a profile spanning `[near, far]` on the depth axis at
    /// `elevation`, with the ridge on the centerline at
    /// `elevation + ridge_rise`.
    pub fn gable(near: f64, far: f64, elevation: f64, ridge_rise: f64) -> Self {
        let ridge = Point3::new(0.0, 0.0, elevation + ridge_rise);
        Self {
            curves: [
                Segment::new(Point3::new(0.0, near, elevation), ridge),
                Segment::new(ridge, Point3::new(0.0, far, elevation)),
            ],
        }
    }

    /// The two profile curves, eave to ridge to eave
    pub fn curves(&self) -> &[Segment; 2] {
        &self.curves
    }

    /// The ridge point shared by both curves
    pub fn ridge(&self) -> Point3 {
        self.curves[0].end
    }
}

/// Reference-plane definition triple
///
/// Mirrors the host's reference-plane constructor: an origin, a bubble end
/// and a free end spanning the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneDef {
    /// Plane origin
    pub origin: Point3,
    /// Bubble end of the plane
    pub bubble_end: Point3,
    /// Free end of the plane
    pub free_end: Point3,
}

impl PlaneDef {
    /// Create a plane definition
    pub fn new(origin: Point3, bubble_end: Point3, free_end: Point3) -> Self {
        Self {
            origin,
            bubble_end,
            free_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_midpoint_and_length() {
        let segment = Segment::new(Point3::new(-5.0, -2.5, 0.0), Point3::new(5.0, -2.5, 0.0));
        assert_relative_eq!(segment.length(), 10.0);
        let mid = segment.midpoint();
        assert_relative_eq!(mid.x, 0.0);
        assert_relative_eq!(mid.y, -2.5);
        assert!(!segment.is_degenerate());

        let point = Point3::new(1.0, 2.0, 3.0);
        assert!(Segment::new(point, point).is_degenerate());
    }

    #[test]
    fn test_footprint_rejects_non_positive_dimensions() {
        assert!(RectFootprint::from_dimensions(0.0, 5.0).is_err());
        assert!(RectFootprint::from_dimensions(10.0, -5.0).is_err());
        assert!(RectFootprint::from_dimensions(f64::NAN, 5.0).is_err());
    }

    #[test]
    fn test_corner_loop_closes_counter_clockwise() {
        let footprint = RectFootprint::from_dimensions(10.0, 5.0).unwrap();
        let corners = footprint.corner_loop();
        assert_eq!(corners[0], corners[4]);
        assert_eq!(corners[0], Point3::new(-5.0, -2.5, 0.0));
        assert_eq!(corners[1], Point3::new(5.0, -2.5, 0.0));
        assert_eq!(corners[2], Point3::new(5.0, 2.5, 0.0));
        assert_eq!(corners[3], Point3::new(-5.0, 2.5, 0.0));
    }

    #[test]
    fn test_edges_are_the_four_rectangle_sides() {
        let footprint = RectFootprint::from_dimensions(10.0, 5.0).unwrap();
        let edges = footprint.edges();
        assert_eq!(edges.len(), 4);
        // south edge first, then counter-clockwise
        assert_eq!(edges[0].start, Point3::new(-5.0, -2.5, 0.0));
        assert_eq!(edges[0].end, Point3::new(5.0, -2.5, 0.0));
        assert_eq!(edges[3].end, edges[0].start);
        for edge in &edges {
            assert!(!edge.is_degenerate());
        }
    }

    #[test]
    fn test_gable_profile_ridge() {
        let profile = GableProfile::gable(-2.6, 2.6, 3.0, 5.0);
        let ridge = profile.ridge();
        assert_relative_eq!(ridge.z, 8.0);
        assert_relative_eq!(ridge.y, 0.0);
        let curves = profile.curves();
        assert_eq!(curves[0].end, curves[1].start);
        assert_relative_eq!(curves[0].start.y, -2.6);
        assert_relative_eq!(curves[1].end.y, 2.6);
    }
}
