// ar-core/src/units.rs

use uom::si::f64::Pressure as UomPressure;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

/// Unit used when reading pressures back out to an operator.
///
/// The engine computes everything in bar; this only affects presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PressureUnit {
    #[default]
    Bar,
    Kpa,
    Psi,
}

impl PressureUnit {
    pub fn convert(self, p: Pressure) -> f64 {
        use uom::si::pressure::{bar, kilopascal, pound_force_per_square_inch};
        match self {
            PressureUnit::Bar => p.get::<bar>(),
            PressureUnit::Kpa => p.get::<kilopascal>(),
            PressureUnit::Psi => p.get::<pound_force_per_square_inch>(),
        }
    }

    /// Convert a bar reading into this unit.
    pub fn from_bar(self, v: f64) -> f64 {
        self.convert(bar(v))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Kpa => "kPa",
            PressureUnit::Psi => "psi",
        }
    }
}
