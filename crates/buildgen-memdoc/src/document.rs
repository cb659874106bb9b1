// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory host document with staged, atomic transactions
//!
//! [`MemDocument`] keeps committed elements in a hash map and stages every
//! mutation inside the open transaction. Commit merges staged state into the
//! committed store; rollback discards it, so nothing performed inside a
//! failed change scope is observable afterwards.

use std::collections::hash_map::Entry;

use buildgen_model::{
    BuildError, BuiltinParam, Category, DocumentOps, ElementCatalog, ElementId, FamilyKey,
    GableProfile, LevelHandle, ParamValue, PlaneDef, Point3, Result, RoofTypeHandle, Segment,
    SymbolHandle,
};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::catalog::Catalog;

/// Element payloads stored by the in-memory document
#[derive(Clone, Debug)]
enum Element {
    Level {
        name: String,
        elevation: f64,
    },
    Symbol {
        category: Category,
        key: FamilyKey,
        is_active: bool,
    },
    RoofType {
        key: FamilyKey,
    },
    Wall {
        line: Segment,
        base_level: ElementId,
        top_level: Option<ElementId>,
        width: f64,
        structural: bool,
    },
    Instance {
        symbol: ElementId,
        host_wall: ElementId,
        level: ElementId,
        location: Point3,
        sill_height: Option<f64>,
        structural: bool,
    },
    ReferencePlane {
        def: PlaneDef,
    },
    ExtrusionRoof {
        roof_type: ElementId,
        plane: ElementId,
        level: ElementId,
        profile: GableProfile,
        extrusion_start: f64,
        extrusion_end: f64,
    },
}

/// Journal entry describing one document operation
///
/// Creation and parameter-set entries only reach the journal when their
/// transaction commits; the transaction lifecycle entries are always
/// recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum DocOp {
    /// A change scope was opened
    TransactionBegan { name: String },
    /// The open change scope committed
    TransactionCommitted,
    /// The open change scope was discarded
    TransactionRolledBack,
    /// A wall was created along `line`
    WallCreated {
        id: ElementId,
        line: Segment,
        base_level: ElementId,
    },
    /// A built-in parameter was set
    ParamSet {
        element: ElementId,
        param: BuiltinParam,
        value: ParamValue,
    },
    /// A family symbol was activated
    SymbolActivated { id: ElementId },
    /// A family instance was placed
    InstancePlaced {
        id: ElementId,
        symbol: ElementId,
        host_wall: ElementId,
        level: ElementId,
        location: Point3,
    },
    /// A reference plane was created
    ReferencePlaneCreated { id: ElementId },
    /// An extrusion roof was created
    RoofCreated {
        id: ElementId,
        roof_type: ElementId,
        extrusion_start: f64,
        extrusion_end: f64,
    },
}

/// Staged state of the open transaction
#[derive(Debug, Default)]
struct Txn {
    staged: FxHashMap<ElementId, Element>,
    ops: Vec<DocOp>,
}

/// An in-memory host document
///
/// The internal length unit is metres, so `internal_units_per_metre` is 1.0
/// and the 800 mm sill height of the default generator converts to 0.8.
#[derive(Debug)]
pub struct MemDocument {
    elements: FxHashMap<ElementId, Element>,
    journal: Vec<DocOp>,
    next_id: u32,
    txn: Option<Txn>,
    wall_thickness: f64,
}

impl MemDocument {
    /// Create a document seeded from a catalog
    ///
    /// Catalog content (levels, symbols, roof types) pre-exists any change
    /// scope, the way it would in a host application.
    pub fn new(catalog: Catalog) -> Self {
        let mut doc = Self {
            elements: FxHashMap::default(),
            journal: Vec::new(),
            next_id: 1,
            txn: None,
            wall_thickness: catalog.wall_thickness,
        };
        for (name, elevation) in catalog.levels {
            let id = doc.alloc_id();
            doc.elements.insert(id, Element::Level { name, elevation });
        }
        for key in catalog.door_symbols {
            let id = doc.alloc_id();
            doc.elements.insert(
                id,
                Element::Symbol {
                    category: Category::Doors,
                    key,
                    is_active: false,
                },
            );
        }
        for key in catalog.window_symbols {
            let id = doc.alloc_id();
            doc.elements.insert(
                id,
                Element::Symbol {
                    category: Category::Windows,
                    key,
                    is_active: false,
                },
            );
        }
        for key in catalog.roof_types {
            let id = doc.alloc_id();
            doc.elements.insert(id, Element::RoofType { key });
        }
        doc
    }

    /// Create an empty document with no catalog content
    pub fn empty() -> Self {
        Self::new(Catalog::new())
    }

    /// Journal of committed operations and transaction lifecycle events
    pub fn journal(&self) -> &[DocOp] {
        &self.journal
    }

    /// IDs of committed walls, in creation order
    pub fn walls(&self) -> Vec<ElementId> {
        self.committed_ids(|element| matches!(element, Element::Wall { .. }))
    }

    /// IDs of committed family instances, in creation order
    pub fn instances(&self) -> Vec<ElementId> {
        self.committed_ids(|element| matches!(element, Element::Instance { .. }))
    }

    /// IDs of committed extrusion roofs, in creation order
    pub fn roofs(&self) -> Vec<ElementId> {
        self.committed_ids(|element| matches!(element, Element::ExtrusionRoof { .. }))
    }

    /// IDs of committed reference planes, in creation order
    pub fn reference_planes(&self) -> Vec<ElementId> {
        self.committed_ids(|element| matches!(element, Element::ReferencePlane { .. }))
    }

    /// Committed top-constraint level of a wall, if set
    pub fn wall_top_level(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::Wall { top_level, .. }) => *top_level,
            _ => None,
        }
    }

    /// Base level of a committed wall
    pub fn wall_base_level(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::Wall { base_level, .. }) => Some(*base_level),
            _ => None,
        }
    }

    /// Whether a committed wall or instance was created load-bearing
    pub fn is_structural(&self, id: ElementId) -> Option<bool> {
        match self.elements.get(&id) {
            Some(Element::Wall { structural, .. }) => Some(*structural),
            Some(Element::Instance { structural, .. }) => Some(*structural),
            _ => None,
        }
    }

    /// Committed sill height of an instance, if set
    pub fn instance_sill_height(&self, id: ElementId) -> Option<f64> {
        match self.elements.get(&id) {
            Some(Element::Instance { sill_height, .. }) => *sill_height,
            _ => None,
        }
    }

    /// Symbol a committed instance was placed from
    pub fn instance_symbol(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::Instance { symbol, .. }) => Some(*symbol),
            _ => None,
        }
    }

    /// Wall a committed instance is hosted on
    pub fn instance_host_wall(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::Instance { host_wall, .. }) => Some(*host_wall),
            _ => None,
        }
    }

    /// Level a committed instance is associated with
    pub fn instance_level(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::Instance { level, .. }) => Some(*level),
            _ => None,
        }
    }

    /// Placement point of a committed instance
    pub fn instance_location(&self, id: ElementId) -> Option<Point3> {
        match self.elements.get(&id) {
            Some(Element::Instance { location, .. }) => Some(*location),
            _ => None,
        }
    }

    /// Extrusion range of a committed roof
    pub fn roof_extrusion_range(&self, id: ElementId) -> Option<(f64, f64)> {
        match self.elements.get(&id) {
            Some(Element::ExtrusionRoof {
                extrusion_start,
                extrusion_end,
                ..
            }) => Some((*extrusion_start, *extrusion_end)),
            _ => None,
        }
    }

    /// Profile of a committed roof
    pub fn roof_profile(&self, id: ElementId) -> Option<GableProfile> {
        match self.elements.get(&id) {
            Some(Element::ExtrusionRoof { profile, .. }) => Some(*profile),
            _ => None,
        }
    }

    /// Reference plane a committed roof is supported by
    pub fn roof_plane(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::ExtrusionRoof { plane, .. }) => Some(*plane),
            _ => None,
        }
    }

    /// Level a committed roof is associated with
    pub fn roof_level(&self, id: ElementId) -> Option<ElementId> {
        match self.elements.get(&id) {
            Some(Element::ExtrusionRoof { level, .. }) => Some(*level),
            _ => None,
        }
    }

    /// Definition triple of a committed reference plane
    pub fn reference_plane_def(&self, id: ElementId) -> Option<PlaneDef> {
        match self.elements.get(&id) {
            Some(Element::ReferencePlane { def }) => Some(*def),
            _ => None,
        }
    }

    fn alloc_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Look up an element, seeing staged state of the open transaction first
    fn element(&self, id: ElementId) -> Option<&Element> {
        if let Some(txn) = &self.txn {
            if let Some(element) = txn.staged.get(&id) {
                return Some(element);
            }
        }
        self.elements.get(&id)
    }

    /// All element IDs visible right now (committed plus staged), sorted
    fn visible_ids(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self.elements.keys().copied().collect();
        if let Some(txn) = &self.txn {
            ids.extend(txn.staged.keys().copied().filter(|id| !self.elements.contains_key(id)));
        }
        ids.sort_by_key(|id| id.0);
        ids
    }

    fn committed_ids(&self, filter: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self
            .elements
            .iter()
            .filter(|(_, element)| filter(element))
            .map(|(id, _)| *id)
            .collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    fn require_open_txn(&self) -> Result<()> {
        if self.txn.is_none() {
            return Err(BuildError::NoActiveTransaction);
        }
        Ok(())
    }

    /// Stage a newly created element and record its creation op
    fn stage_new(&mut self, id: ElementId, element: Element, op: DocOp) {
        if let Some(txn) = self.txn.as_mut() {
            txn.staged.insert(id, element);
            txn.ops.push(op);
        }
    }

    fn push_op(&mut self, op: DocOp) {
        if let Some(txn) = self.txn.as_mut() {
            txn.ops.push(op);
        }
    }

    /// Stage an existing element for modification, copying committed state
    /// into the transaction on first touch
    fn stage_existing(&mut self, id: ElementId) -> Result<&mut Element> {
        let committed = self.elements.get(&id).cloned();
        let txn = self.txn.as_mut().ok_or(BuildError::NoActiveTransaction)?;
        if let Entry::Vacant(vacant) = txn.staged.entry(id) {
            match committed {
                Some(element) => {
                    vacant.insert(element);
                }
                None => return Err(BuildError::ElementNotFound(id)),
            }
        }
        txn.staged
            .get_mut(&id)
            .ok_or(BuildError::ElementNotFound(id))
    }

    fn expect_level(&self, id: ElementId) -> Result<()> {
        match self.element(id) {
            Some(Element::Level { .. }) => Ok(()),
            Some(_) => Err(BuildError::host(format!("element {id} is not a level"))),
            None => Err(BuildError::ElementNotFound(id)),
        }
    }

    fn expect_wall(&self, id: ElementId) -> Result<()> {
        match self.element(id) {
            Some(Element::Wall { .. }) => Ok(()),
            Some(_) => Err(BuildError::host(format!("element {id} is not a wall"))),
            None => Err(BuildError::ElementNotFound(id)),
        }
    }
}

impl ElementCatalog for MemDocument {
    fn levels(&self) -> Vec<LevelHandle> {
        self.visible_ids()
            .into_iter()
            .filter_map(|id| match self.element(id) {
                Some(Element::Level { name, elevation }) => Some(LevelHandle {
                    id,
                    name: name.clone(),
                    elevation: *elevation,
                }),
                _ => None,
            })
            .collect()
    }

    fn family_symbols(&self, category: Category) -> Vec<SymbolHandle> {
        self.visible_ids()
            .into_iter()
            .filter_map(|id| match self.element(id) {
                Some(Element::Symbol {
                    category: found,
                    key,
                    is_active,
                }) if *found == category => Some(SymbolHandle {
                    id,
                    category,
                    key: key.clone(),
                    is_active: *is_active,
                }),
                _ => None,
            })
            .collect()
    }

    fn roof_types(&self) -> Vec<RoofTypeHandle> {
        self.visible_ids()
            .into_iter()
            .filter_map(|id| match self.element(id) {
                Some(Element::RoofType { key }) => Some(RoofTypeHandle {
                    id,
                    key: key.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    fn wall_centerline(&self, wall: ElementId) -> Result<Segment> {
        match self.element(wall) {
            Some(Element::Wall { line, .. }) => Ok(*line),
            Some(_) => Err(BuildError::host(format!("element {wall} is not a wall"))),
            None => Err(BuildError::ElementNotFound(wall)),
        }
    }

    fn wall_width(&self, wall: ElementId) -> Result<f64> {
        match self.element(wall) {
            Some(Element::Wall { width, .. }) => Ok(*width),
            Some(_) => Err(BuildError::host(format!("element {wall} is not a wall"))),
            None => Err(BuildError::ElementNotFound(wall)),
        }
    }
}

impl DocumentOps for MemDocument {
    fn begin_transaction(&mut self, name: &str) -> Result<()> {
        if self.txn.is_some() {
            return Err(BuildError::TransactionAlreadyActive);
        }
        self.journal.push(DocOp::TransactionBegan {
            name: name.to_string(),
        });
        self.txn = Some(Txn::default());
        debug!(name, "transaction opened");
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<()> {
        let txn = self.txn.take().ok_or(BuildError::NoActiveTransaction)?;
        let staged = txn.staged.len();
        self.elements.extend(txn.staged);
        self.journal.extend(txn.ops);
        self.journal.push(DocOp::TransactionCommitted);
        debug!(staged, "transaction committed");
        Ok(())
    }

    fn roll_back_transaction(&mut self) -> Result<()> {
        let txn = self.txn.take().ok_or(BuildError::NoActiveTransaction)?;
        self.journal.push(DocOp::TransactionRolledBack);
        debug!(discarded = txn.staged.len(), "transaction rolled back");
        Ok(())
    }

    fn has_open_transaction(&self) -> bool {
        self.txn.is_some()
    }

    fn create_wall(
        &mut self,
        line: Segment,
        base_level: ElementId,
        structural: bool,
    ) -> Result<ElementId> {
        self.require_open_txn()?;
        if line.is_degenerate() {
            return Err(BuildError::invalid_geometry(
                "wall location curve has zero length",
            ));
        }
        self.expect_level(base_level)?;
        let id = self.alloc_id();
        self.stage_new(
            id,
            Element::Wall {
                line,
                base_level,
                top_level: None,
                width: self.wall_thickness,
                structural,
            },
            DocOp::WallCreated {
                id,
                line,
                base_level,
            },
        );
        Ok(id)
    }

    fn set_element_param(
        &mut self,
        element: ElementId,
        param: BuiltinParam,
        value: ParamValue,
    ) -> Result<()> {
        self.require_open_txn()?;
        match (param, value) {
            (BuiltinParam::WallTopConstraint, ParamValue::ElementRef(level)) => {
                self.expect_level(level)?;
                match self.stage_existing(element)? {
                    Element::Wall { top_level, .. } => *top_level = Some(level),
                    _ => {
                        return Err(BuildError::host(format!(
                            "parameter WallTopConstraint not present on element {element}"
                        )))
                    }
                }
            }
            (BuiltinParam::SillHeight, ParamValue::Length(height)) => {
                // sill height exists on window instances only
                let symbol = match self.element(element) {
                    Some(Element::Instance { symbol, .. }) => *symbol,
                    Some(_) => {
                        return Err(BuildError::host(format!(
                            "parameter SillHeight not present on element {element}"
                        )))
                    }
                    None => return Err(BuildError::ElementNotFound(element)),
                };
                match self.element(symbol) {
                    Some(Element::Symbol {
                        category: Category::Windows,
                        ..
                    }) => {}
                    _ => {
                        return Err(BuildError::host(format!(
                            "parameter SillHeight not present on element {element}"
                        )))
                    }
                }
                if let Element::Instance { sill_height, .. } = self.stage_existing(element)? {
                    *sill_height = Some(height);
                }
            }
            _ => {
                return Err(BuildError::host(
                    "parameter value has the wrong storage type",
                ))
            }
        }
        self.push_op(DocOp::ParamSet {
            element,
            param,
            value,
        });
        Ok(())
    }

    fn activate_symbol(&mut self, symbol: ElementId) -> Result<()> {
        self.require_open_txn()?;
        match self.stage_existing(symbol)? {
            Element::Symbol { is_active, .. } => *is_active = true,
            _ => {
                return Err(BuildError::host(format!(
                    "element {symbol} is not a family symbol"
                )))
            }
        }
        self.push_op(DocOp::SymbolActivated { id: symbol });
        Ok(())
    }

    fn place_instance(
        &mut self,
        location: Point3,
        symbol: ElementId,
        host_wall: ElementId,
        level: ElementId,
        structural: bool,
    ) -> Result<ElementId> {
        self.require_open_txn()?;
        match self.element(symbol) {
            Some(Element::Symbol { is_active, .. }) => {
                if !is_active {
                    return Err(BuildError::host(format!(
                        "symbol {symbol} must be activated before placement"
                    )));
                }
            }
            Some(_) => {
                return Err(BuildError::host(format!(
                    "element {symbol} is not a family symbol"
                )))
            }
            None => return Err(BuildError::ElementNotFound(symbol)),
        }
        self.expect_wall(host_wall)?;
        self.expect_level(level)?;
        let id = self.alloc_id();
        self.stage_new(
            id,
            Element::Instance {
                symbol,
                host_wall,
                level,
                location,
                sill_height: None,
                structural,
            },
            DocOp::InstancePlaced {
                id,
                symbol,
                host_wall,
                level,
                location,
            },
        );
        Ok(id)
    }

    fn create_reference_plane(&mut self, plane: PlaneDef) -> Result<ElementId> {
        self.require_open_txn()?;
        let id = self.alloc_id();
        self.stage_new(
            id,
            Element::ReferencePlane { def: plane },
            DocOp::ReferencePlaneCreated { id },
        );
        Ok(id)
    }

    fn create_extrusion_roof(
        &mut self,
        profile: &GableProfile,
        plane: ElementId,
        level: ElementId,
        roof_type: ElementId,
        extrusion_start: f64,
        extrusion_end: f64,
    ) -> Result<ElementId> {
        self.require_open_txn()?;
        match self.element(roof_type) {
            Some(Element::RoofType { .. }) => {}
            Some(_) => {
                return Err(BuildError::host(format!(
                    "element {roof_type} is not a roof type"
                )))
            }
            None => return Err(BuildError::ElementNotFound(roof_type)),
        }
        match self.element(plane) {
            Some(Element::ReferencePlane { .. }) => {}
            Some(_) => {
                return Err(BuildError::host(format!(
                    "element {plane} is not a reference plane"
                )))
            }
            None => return Err(BuildError::ElementNotFound(plane)),
        }
        self.expect_level(level)?;
        if extrusion_start >= extrusion_end {
            return Err(BuildError::invalid_geometry("extrusion range is empty"));
        }
        let id = self.alloc_id();
        self.stage_new(
            id,
            Element::ExtrusionRoof {
                roof_type,
                plane,
                level,
                profile: *profile,
                extrusion_start,
                extrusion_end,
            },
            DocOp::RoofCreated {
                id,
                roof_type,
                extrusion_start,
                extrusion_end,
            },
        );
        Ok(id)
    }

    fn internal_units_per_metre(&self) -> f64 {
        1.0
    }
}
