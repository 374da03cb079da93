use crate::domain::AppError;
use crate::domain::parameters::Parameter;

use super::unit_parameters::UnitParameters;

pub const REDUCED_EQUIVALENT_DOSE_KEY: &str = "uv_reduced_equivalent_dose";
pub const TRANSMITTANCE_IN_KEY: &str = "uv_transmittance_in";
pub const ENERGY_INTENSITY_KEY: &str = "energy_electric_flow_vol_inlet";

/// Operating parameters of an ultraviolet irradiation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UvIrradiation {
    pub reduced_equivalent_dose: Parameter,
    pub transmittance_in: Parameter,
    pub energy_electric_flow_vol_inlet: Parameter,
}

impl UvIrradiation {
    pub fn from_unit(unit: &UnitParameters) -> Result<Self, AppError> {
        Ok(Self {
            reduced_equivalent_dose: unit.operating(REDUCED_EQUIVALENT_DOSE_KEY)?.clone(),
            transmittance_in: unit.operating(TRANSMITTANCE_IN_KEY)?.clone(),
            energy_electric_flow_vol_inlet: unit.operating(ENERGY_INTENSITY_KEY)?.clone(),
        })
    }
}
