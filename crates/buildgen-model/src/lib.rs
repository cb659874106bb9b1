// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BuildGen Model - Trait definitions and shared types for driving a host
//! CAD document
//!
//! This crate provides the core abstractions for procedurally creating
//! building elements inside a host-owned document. It defines the slice of
//! the host surface the generator consumes, so commands can be written
//! against traits and exercised against any backend (a real host bridge or
//! an in-memory document).
//!
//! # Architecture
//!
//! The crate is organized around a few key pieces:
//!
//! - [`ElementCatalog`] - Read-only enumeration of levels and catalog content
//! - [`DocumentOps`] - Element creation, parameter sets, and the transaction
//!   (atomic change scope) primitive
//! - [`HostDocument`] - The full surface, combining the two
//! - [`ExternalCommand`] - The plugin entry point contract
//!
//! # Example
//!
//! ```ignore
//! use buildgen_model::{ExternalCommand, HostDocument};
//!
//! fn invoke(command: &dyn ExternalCommand, document: &mut dyn HostDocument) {
//!     let result = command.execute(document);
//!     println!("outcome: {:?}", result.outcome);
//! }
//! ```

pub mod command;
pub mod document;
pub mod error;
pub mod geometry;
pub mod types;
pub mod units;

// Re-export all public types
pub use command::*;
pub use document::*;
pub use error::*;
pub use geometry::*;
pub use types::*;
pub use units::*;
