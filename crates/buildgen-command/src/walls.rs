// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall ring construction
//!
//! Builds the four perimeter walls of a rectangular footprint and tags each
//! with its compass role, so downstream steps pick host walls by role rather
//! than by creation order.

use buildgen_model::{
    BuiltinParam, ElementId, HostDocument, LevelHandle, ParamValue, RectFootprint, Result,
};
use std::fmt;
use tracing::debug;

/// Compass role of a perimeter wall
///
/// Roles follow the footprint's edge order: the south edge is built first,
/// then east, north and west, counter-clockwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WallRole {
    South,
    East,
    North,
    West,
}

impl WallRole {
    /// All roles, in construction order
    pub const ALL: [WallRole; 4] = [
        WallRole::South,
        WallRole::East,
        WallRole::North,
        WallRole::West,
    ];

    /// Lowercase compass name
    pub fn name(&self) -> &'static str {
        match self {
            WallRole::South => "south",
            WallRole::East => "east",
            WallRole::North => "north",
            WallRole::West => "west",
        }
    }
}

impl fmt::Display for WallRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The four perimeter walls of one generated building, tagged by role
#[derive(Clone, Copy, Debug)]
pub struct WallRing {
    walls: [(WallRole, ElementId); 4],
}

impl WallRing {
    /// Wall holding the given compass role
    pub fn wall(&self, role: WallRole) -> ElementId {
        // entries are stored in role declaration order, one per role
        self.walls[role as usize].1
    }

    /// Wall that receives the door
    pub fn door_wall(&self) -> ElementId {
        self.wall(WallRole::South)
    }

    /// Walls that receive a window each
    pub fn window_walls(&self) -> [ElementId; 3] {
        [
            self.wall(WallRole::East),
            self.wall(WallRole::North),
            self.wall(WallRole::West),
        ]
    }

    /// All wall IDs, in construction order
    pub fn ids(&self) -> [ElementId; 4] {
        [
            self.walls[0].1,
            self.walls[1].1,
            self.walls[2].1,
            self.walls[3].1,
        ]
    }
}

/// Build the four perimeter walls between two levels
///
/// Each wall runs along one footprint edge, is based on `base_level` and has
/// its top constrained to `top_level`. Walls are non-structural.
///
/// # Arguments
/// * `document` - Open-transaction host document
/// * `footprint` - Rectangular footprint whose edges become centerlines
/// * `base_level` - Level the walls start from
/// * `top_level` - Level the wall tops are constrained to
pub fn build_wall_ring<D: HostDocument + ?Sized>(
    document: &mut D,
    footprint: &RectFootprint,
    base_level: &LevelHandle,
    top_level: &LevelHandle,
) -> Result<WallRing> {
    let edges = footprint.edges();
    let mut walls = [(WallRole::South, ElementId::default()); 4];
    for (slot, (role, edge)) in walls
        .iter_mut()
        .zip(WallRole::ALL.into_iter().zip(edges))
    {
        let id = document.create_wall(edge, base_level.id, false)?;
        document.set_element_param(
            id,
            BuiltinParam::WallTopConstraint,
            ParamValue::ElementRef(top_level.id),
        )?;
        debug!(wall = %id, role = role.name(), "created perimeter wall");
        *slot = (role, id);
    }
    Ok(WallRing { walls })
}
