// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and conversion toward the host's internal unit
//!
//! Real-world lengths (footprint dimensions, sill heights) are expressed in
//! a named unit and converted through metres into whatever internal unit the
//! host document uses.

use serde::{Deserialize, Serialize};

/// Real-world length unit accepted by the conversion surface
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Millimetres
    Millimetres,
    /// Centimetres
    Centimetres,
    /// Metres
    Metres,
    /// Inches
    Inches,
    /// Feet
    Feet,
}

impl LengthUnit {
    /// Conversion factor from this unit to metres
    pub fn factor_to_metres(self) -> f64 {
        match self {
            LengthUnit::Millimetres => scales::MILLIMETRE,
            LengthUnit::Centimetres => scales::CENTIMETRE,
            LengthUnit::Metres => scales::METRE,
            LengthUnit::Inches => scales::INCH,
            LengthUnit::Feet => scales::FOOT,
        }
    }
}

/// Common unit scales for reference (metres per unit)
pub mod scales {
    /// Metres to metres (identity)
    pub const METRE: f64 = 1.0;
    /// Millimetres to metres
    pub const MILLIMETRE: f64 = 0.001;
    /// Centimetres to metres
    pub const CENTIMETRE: f64 = 0.01;
    /// Inches to metres
    pub const INCH: f64 = 0.0254;
    /// Feet to metres
    pub const FOOT: f64 = 0.3048;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_factors() {
        assert!((LengthUnit::Millimetres.factor_to_metres() - 0.001).abs() < 1e-10);
        assert!((LengthUnit::Metres.factor_to_metres() - 1.0).abs() < 1e-10);
        assert!((LengthUnit::Feet.factor_to_metres() - 0.3048).abs() < 1e-10);
    }
}
