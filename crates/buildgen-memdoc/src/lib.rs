// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BuildGen MemDoc - An in-memory host document
//!
//! Implements the `buildgen-model` capability traits against a plain
//! in-memory element store with staged, atomic transactions. Useful as a
//! stand-in host for tests and for exercising generator commands without a
//! real CAD application.
//!
//! # Example
//!
//! ```ignore
//! use buildgen_memdoc::{Catalog, MemDocument};
//! use buildgen_model::ElementCatalog;
//!
//! let catalog = Catalog::new()
//!     .with_level("L1", 0.0)
//!     .with_level("L2", 3.0);
//! let doc = MemDocument::new(catalog);
//! assert_eq!(doc.levels().len(), 2);
//! ```

pub mod catalog;
pub mod document;

pub use catalog::*;
pub use document::*;
