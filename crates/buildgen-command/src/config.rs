// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generator configuration
//!
//! All catalog lookups are driven by names held here, so a deployment can
//! retarget the generator at different content by deserializing a different
//! config. Defaults reproduce the Russian-localized catalog the command was
//! originally written against.

use buildgen_model::FamilyKey;
use serde::{Deserialize, Serialize};

/// Parameters of one building-generation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Name of the level walls are based on
    pub base_level_name: String,
    /// Name of the level wall tops are constrained to
    pub top_level_name: String,
    /// Footprint extent along X, in millimetres
    pub width_mm: f64,
    /// Footprint extent along Y, in millimetres
    pub depth_mm: f64,
    /// Door type placed on the south wall
    pub door: FamilyKey,
    /// Window type placed on the three remaining walls
    pub window: FamilyKey,
    /// Window sill height above the base level, in millimetres
    pub window_sill_mm: f64,
    /// Roof type of the gable roof
    pub roof_type: FamilyKey,
    /// Ridge rise above the top level, in internal units
    pub ridge_rise: f64,
    /// Display name of the change scope
    pub transaction_name: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_level_name: "Уровень 1".to_string(),
            top_level_name: "Уровень 2".to_string(),
            width_mm: 10_000.0,
            depth_mm: 5_000.0,
            door: FamilyKey::new("0915 x 2134 мм", "Одиночные-Щитовые"),
            window: FamilyKey::new("0406 x 0610 мм", "Фиксированные"),
            window_sill_mm: 800.0,
            roof_type: FamilyKey::new("Типовой - 400мм", "Базовая крыша"),
            ridge_rise: 5.0,
            transaction_name: "Построение стен".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = BuildConfig::default();
        assert_eq!(config.base_level_name, "Уровень 1");
        assert_eq!(config.top_level_name, "Уровень 2");
        assert_eq!(config.width_mm, 10_000.0);
        assert_eq!(config.depth_mm, 5_000.0);
        assert_eq!(config.window_sill_mm, 800.0);
        assert_eq!(config.ridge_rise, 5.0);
        assert_eq!(config.transaction_name, "Построение стен");
        assert!(config.door.matches("0915 x 2134 мм", "Одиночные-Щитовые"));
        assert!(config.window.matches("0406 x 0610 мм", "Фиксированные"));
        assert!(config.roof_type.matches("Типовой - 400мм", "Базовая крыша"));
    }
}
