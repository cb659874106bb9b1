// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for building generation

use crate::{Category, ElementId, FamilyKey};
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while generating building elements
///
/// There are exactly two families: lookup misses (a named entity absent from
/// the host catalog, surfaced at first use) and host-operation failures
/// (any rejection by the host's document-mutation surface).
#[derive(Error, Debug)]
pub enum BuildError {
    /// No level with the requested exact name
    #[error("No level named '{0}' in the document")]
    LevelNotFound(String),

    /// No family symbol matching the (type name, family name) key
    #[error("No {category} type matching {key}")]
    SymbolNotFound {
        category: Category,
        key: FamilyKey,
    },

    /// No roof type matching the (type name, family name) key
    #[error("No roof type matching {0}")]
    RoofTypeNotFound(FamilyKey),

    /// Referenced element does not exist in the document
    #[error("Element {0} not found")]
    ElementNotFound(ElementId),

    /// A mutation was attempted outside an open transaction
    #[error("No transaction is open")]
    NoActiveTransaction,

    /// A second transaction was opened before the first closed
    #[error("A transaction is already open")]
    TransactionAlreadyActive,

    /// The host rejected the supplied geometry
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Any other rejection by the host document
    #[error("Host operation failed: {0}")]
    Host(String),
}

impl BuildError {
    /// Create a level lookup-miss error
    pub fn level_not_found(name: impl Into<String>) -> Self {
        BuildError::LevelNotFound(name.into())
    }

    /// Create a symbol lookup-miss error
    pub fn symbol_not_found(category: Category, key: FamilyKey) -> Self {
        BuildError::SymbolNotFound { category, key }
    }

    /// Create an invalid geometry error
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        BuildError::InvalidGeometry(msg.into())
    }

    /// Create a host-operation failure
    pub fn host(msg: impl Into<String>) -> Self {
        BuildError::Host(msg.into())
    }
}
