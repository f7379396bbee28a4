// hr-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity,
    SpecificHeatCapacity as UomSpecificHeatCapacity, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type SpecificHeat = UomSpecificHeatCapacity;
pub type Conductivity = UomThermalConductivity;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn wpmk(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn jpkgk(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_base_values() {
        assert_eq!(m(0.1).value, 0.1);
        assert_eq!(k(300.0).value, 300.0);
        assert_eq!(s(30.0).value, 30.0);
        assert_eq!(wpmk(410.0).value, 410.0);
        assert_eq!(kgpm3(8920.0).value, 8920.0);
        assert_eq!(jpkgk(385.0).value, 385.0);
    }
}
