// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The building-generator command
//!
//! Orchestrates the full pipeline: resolve both levels, build the wall
//! ring, place the door and the three windows, build the gable roof, all
//! inside one change scope. Any error rolls the scope back and is returned
//! to the host as a failure message; the document is left untouched.

use crate::config::BuildConfig;
use crate::openings::{place_door, place_window};
use crate::resolve::find_level;
use crate::roof::build_gable_roof;
use crate::walls::build_wall_ring;
use buildgen_model::{
    BuildError, CommandResult, ExternalCommand, HostDocument, LengthUnit, RectFootprint, Result,
};
use tracing::{info, warn};

/// Generates a rectangular building: walls, door, windows and a gable roof
#[derive(Clone, Debug, Default)]
pub struct BuildingGenerator {
    config: BuildConfig,
}

impl BuildingGenerator {
    /// Create a generator with an explicit configuration
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    fn run(&self, document: &mut dyn HostDocument) -> Result<()> {
        let config = &self.config;

        // lookups and geometry validation happen before the change scope opens
        let base_level = find_level(&*document, &config.base_level_name)
            .ok_or_else(|| BuildError::level_not_found(&config.base_level_name))?;
        let top_level = find_level(&*document, &config.top_level_name)
            .ok_or_else(|| BuildError::level_not_found(&config.top_level_name))?;

        let width = document.to_internal(config.width_mm, LengthUnit::Millimetres);
        let depth = document.to_internal(config.depth_mm, LengthUnit::Millimetres);
        let footprint = RectFootprint::from_dimensions(width, depth)?;

        document.begin_transaction(&config.transaction_name)?;

        let ring = build_wall_ring(document, &footprint, &base_level, &top_level)?;
        place_door(document, &config.door, ring.door_wall(), &base_level)?;
        for wall in ring.window_walls() {
            place_window(
                document,
                &config.window,
                wall,
                &base_level,
                config.window_sill_mm,
            )?;
        }
        build_gable_roof(
            document,
            &ring,
            &footprint,
            &top_level,
            &config.roof_type,
            config.ridge_rise,
        )?;

        document.commit_transaction()?;
        info!(
            width_mm = config.width_mm,
            depth_mm = config.depth_mm,
            "building generated"
        );
        Ok(())
    }
}

impl ExternalCommand for BuildingGenerator {
    fn execute(&self, document: &mut dyn HostDocument) -> CommandResult {
        match self.run(document) {
            Ok(()) => CommandResult::succeeded(),
            Err(err) => {
                if document.has_open_transaction() {
                    // rollback failure would mask the original error
                    if let Err(rollback_err) = document.roll_back_transaction() {
                        warn!(error = %rollback_err, "rollback failed");
                    }
                }
                warn!(error = %err, "building generation failed");
                CommandResult::failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use buildgen_memdoc::{Catalog, DocOp, MemDocument};
    use buildgen_model::{Category, CommandOutcome, DocumentOps, ElementCatalog};

    fn full_catalog() -> Catalog {
        Catalog::new()
            .with_level("Уровень 1", 0.0)
            .with_level("Уровень 2", 4.0)
            .with_door("0915 x 2134 мм", "Одиночные-Щитовые")
            .with_window("0406 x 0610 мм", "Фиксированные")
            .with_roof_type("Типовой - 400мм", "Базовая крыша")
    }

    #[test]
    fn test_default_run_generates_the_full_building() {
        let mut doc = MemDocument::new(full_catalog());
        let result = BuildingGenerator::default().execute(&mut doc);
        assert!(result.is_success());
        assert!(!doc.has_open_transaction());

        assert_eq!(doc.walls().len(), 4);
        assert_eq!(doc.instances().len(), 4);
        assert_eq!(doc.roofs().len(), 1);
        assert_eq!(doc.reference_planes().len(), 1);

        let journal = doc.journal();
        assert!(matches!(journal.first(), Some(DocOp::TransactionBegan { name }) if name == "Построение стен"));
        assert_eq!(journal.last(), Some(&DocOp::TransactionCommitted));
    }

    #[test]
    fn test_door_and_windows_split_by_symbol() {
        let mut doc = MemDocument::new(full_catalog());
        assert!(BuildingGenerator::default().execute(&mut doc).is_success());

        let door_symbol = doc.family_symbols(Category::Doors)[0].id;
        let window_symbol = doc.family_symbols(Category::Windows)[0].id;

        let mut doors = 0;
        let mut windows = 0;
        for instance in doc.instances() {
            let symbol = doc.instance_symbol(instance).unwrap();
            if symbol == door_symbol {
                doors += 1;
                assert_eq!(doc.instance_sill_height(instance), None);
            } else {
                assert_eq!(symbol, window_symbol);
                windows += 1;
                assert_relative_eq!(doc.instance_sill_height(instance).unwrap(), 0.8);
            }
        }
        assert_eq!(doors, 1);
        assert_eq!(windows, 3);
    }

    #[test]
    fn test_windows_sit_on_distinct_walls() {
        let mut doc = MemDocument::new(full_catalog());
        assert!(BuildingGenerator::default().execute(&mut doc).is_success());

        let mut host_walls: Vec<_> = doc
            .instances()
            .iter()
            .map(|instance| doc.instance_host_wall(*instance).unwrap())
            .collect();
        host_walls.sort_by_key(|id| u32::from(*id));
        host_walls.dedup();
        // one opening per wall, four walls covered
        assert_eq!(host_walls.len(), 4);
    }

    #[test]
    fn test_roof_spans_footprint_plus_wall_overhang() {
        let mut doc = MemDocument::new(full_catalog().with_wall_thickness(0.2));
        assert!(BuildingGenerator::default().execute(&mut doc).is_success());

        let roof = doc.roofs()[0];
        let (start, end) = doc.roof_extrusion_range(roof).unwrap();
        assert_relative_eq!(start, -5.1);
        assert_relative_eq!(end, 5.1);
        let profile = doc.roof_profile(roof).unwrap();
        assert_relative_eq!(profile.ridge().z, 9.0);
    }

    #[test]
    fn test_missing_level_fails_before_the_change_scope() {
        let mut doc = MemDocument::new(
            Catalog::new()
                .with_level("Уровень 1", 0.0)
                .with_door("0915 x 2134 мм", "Одиночные-Щитовые")
                .with_window("0406 x 0610 мм", "Фиксированные")
                .with_roof_type("Типовой - 400мм", "Базовая крыша"),
        );
        let result = BuildingGenerator::default().execute(&mut doc);
        assert_eq!(result.outcome, CommandOutcome::Failed);
        assert!(result.message.unwrap().contains("Уровень 2"));
        // no change scope was ever opened
        assert!(doc.journal().is_empty());
        assert!(doc.walls().is_empty());
    }

    #[test]
    fn test_failure_mid_pipeline_rolls_everything_back() {
        // walls succeed, then the window lookup misses
        let mut doc = MemDocument::new(
            Catalog::new()
                .with_level("Уровень 1", 0.0)
                .with_level("Уровень 2", 4.0)
                .with_door("0915 x 2134 мм", "Одиночные-Щитовые")
                .with_roof_type("Типовой - 400мм", "Базовая крыша"),
        );
        let result = BuildingGenerator::default().execute(&mut doc);
        assert_eq!(result.outcome, CommandOutcome::Failed);
        assert!(!doc.has_open_transaction());

        assert!(doc.walls().is_empty());
        assert!(doc.instances().is_empty());
        assert!(doc
            .journal()
            .iter()
            .all(|op| !matches!(op, DocOp::WallCreated { .. })));
        assert_eq!(doc.journal().last(), Some(&DocOp::TransactionRolledBack));
    }

    #[test]
    fn test_custom_config_drives_lookups() {
        let mut doc = MemDocument::new(
            Catalog::new()
                .with_level("Ground", 0.0)
                .with_level("Roof", 3.0)
                .with_door("D", "Doors")
                .with_window("W", "Windows")
                .with_roof_type("R", "Roofs"),
        );
        let config = BuildConfig {
            base_level_name: "Ground".to_string(),
            top_level_name: "Roof".to_string(),
            width_mm: 8_000.0,
            depth_mm: 6_000.0,
            door: buildgen_model::FamilyKey::new("D", "Doors"),
            window: buildgen_model::FamilyKey::new("W", "Windows"),
            window_sill_mm: 900.0,
            roof_type: buildgen_model::FamilyKey::new("R", "Roofs"),
            ridge_rise: 2.0,
            transaction_name: "generate".to_string(),
        };
        let result = BuildingGenerator::new(config).execute(&mut doc);
        assert!(result.is_success());

        let roof = doc.roofs()[0];
        let profile = doc.roof_profile(roof).unwrap();
        assert_relative_eq!(profile.ridge().z, 5.0);
        let (start, end) = doc.roof_extrusion_range(roof).unwrap();
        assert_relative_eq!(end - start, 8.0 + 0.2);
        assert_relative_eq!(end, -start);
    }
}
