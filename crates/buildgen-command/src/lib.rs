// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BuildGen Command - A parametric rectangular-building generator
//!
//! Generates a simple building inside a host document reached through the
//! `buildgen-model` capability traits: four walls on a rectangular footprint
//! between two levels, one door on the south wall, a window on each of the
//! remaining walls, and a gable extrusion roof. All mutations run inside a
//! single atomic change scope; any failure rolls the document back.
//!
//! # Example
//!
//! ```ignore
//! use buildgen_command::BuildingGenerator;
//! use buildgen_model::ExternalCommand;
//!
//! let command = BuildingGenerator::default();
//! let result = command.execute(&mut document);
//! assert!(result.is_success());
//! ```

pub mod command;
pub mod config;
pub mod openings;
pub mod resolve;
pub mod roof;
pub mod walls;

pub use command::BuildingGenerator;
pub use config::BuildConfig;
pub use openings::{place_door, place_window};
pub use resolve::{find_level, find_roof_type, find_symbol};
pub use roof::build_gable_roof;
pub use walls::{build_wall_ring, WallRing, WallRole};
