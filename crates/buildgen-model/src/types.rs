// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for host element references and catalog lookups

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe element identifier
///
/// Wraps the raw ID of a host-owned element (e.g. element 123 becomes
/// ElementId(123)). The host owns the element; this is only a reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        ElementId(id)
    }
}

impl From<ElementId> for u32 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// Category of placeable family content
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Door families
    Doors,
    /// Window families
    Windows,
}

impl Category {
    /// Get display name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Doors => "door",
            Category::Windows => "window",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Exact-match lookup key for parametric catalog content
///
/// A (type name, family name) pair identifying one family type in the host
/// catalog. Matching is literal: no normalization, no case folding, no
/// fuzzy fallback.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FamilyKey {
    /// Type name within the family (e.g. "0915 x 2134 мм")
    pub type_name: String,
    /// Family name (e.g. "Одиночные-Щитовые")
    pub family_name: String,
}

impl FamilyKey {
    /// Create a new lookup key
    pub fn new(type_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            family_name: family_name.into(),
        }
    }

    /// Check whether both components match exactly
    pub fn matches(&self, type_name: &str, family_name: &str) -> bool {
        self.type_name == type_name && self.family_name == family_name
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ('{}')", self.type_name, self.family_name)
    }
}

/// Handle to a level - a named horizontal reference elevation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelHandle {
    /// Element ID of the level
    pub id: ElementId,
    /// Level name, matched exactly by the resolver
    pub name: String,
    /// Elevation in internal units
    pub elevation: f64,
}

/// Handle to a placeable family symbol (a family type)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolHandle {
    /// Element ID of the symbol
    pub id: ElementId,
    /// Category the symbol belongs to
    pub category: Category,
    /// The symbol's (type name, family name) key
    pub key: FamilyKey,
    /// Whether the host has activated this symbol for placement
    pub is_active: bool,
}

/// Handle to a roof type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoofTypeHandle {
    /// Element ID of the roof type
    pub id: ElementId,
    /// The roof type's (type name, family name) key
    pub key: FamilyKey,
}

/// Built-in parameters settable on created elements
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BuiltinParam {
    /// A wall's height-termination level reference
    WallTopConstraint,
    /// A window instance's sill height offset
    SillHeight,
}

/// Value for a parameter set
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ParamValue {
    /// Reference to another element (e.g. a level)
    ElementRef(ElementId),
    /// Length in internal units
    Length(f64),
}

impl ParamValue {
    /// Try to get as element reference
    pub fn as_element_ref(&self) -> Option<ElementId> {
        match self {
            ParamValue::ElementRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as length
    pub fn as_length(&self) -> Option<f64> {
        match self {
            ParamValue::Length(value) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_display() {
        assert_eq!(ElementId(123).to_string(), "#123");
    }

    #[test]
    fn test_family_key_exact_match() {
        let key = FamilyKey::new("0915 x 2134 мм", "Одиночные-Щитовые");
        assert!(key.matches("0915 x 2134 мм", "Одиночные-Щитовые"));
        // partial or case-variant matches never count
        assert!(!key.matches("0915 x 2134", "Одиночные-Щитовые"));
        assert!(!key.matches("0915 x 2134 мм", "Одиночные"));
    }

    #[test]
    fn test_param_value_accessors() {
        let length = ParamValue::Length(0.8);
        assert_eq!(length.as_length(), Some(0.8));
        assert_eq!(length.as_element_ref(), None);

        let level = ParamValue::ElementRef(ElementId(7));
        assert_eq!(level.as_element_ref(), Some(ElementId(7)));
        assert_eq!(level.as_length(), None);
    }
}
