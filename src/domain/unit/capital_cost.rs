use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::domain::parameters::{Group, Node, ParamPath, Parameter, SchemaError, Setting};

const COST_FACTOR_KEY: &str = "cost_factor";

/// Fit coefficients of the capital cost curve plus its settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalCost {
    pub cost_factor: Setting,
    pub settings: BTreeMap<String, Setting>,
    pub coefficients: BTreeMap<String, Parameter>,
}

/// One resolved curve coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveCoefficient {
    pub name: String,
    pub value: f64,
    pub units: String,
}

/// The four coefficients (a through d) consumed by a costing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCurve {
    pub a: CurveCoefficient,
    pub b: CurveCoefficient,
    pub c: CurveCoefficient,
    pub d: CurveCoefficient,
}

impl CapitalCost {
    pub fn from_group(path: &ParamPath, group: &Group) -> Result<Self, SchemaError> {
        let mut cost_factor = Setting::Unset;
        let mut settings = BTreeMap::new();
        let mut coefficients = BTreeMap::new();

        for (key, node) in group.iter() {
            match node {
                Node::Setting(setting) if key == COST_FACTOR_KEY => cost_factor = setting.clone(),
                Node::Setting(setting) => {
                    settings.insert(key.to_string(), setting.clone());
                }
                Node::Parameter(parameter) => {
                    coefficients.insert(key.to_string(), parameter.clone());
                }
                Node::Group(_) => {
                    return Err(SchemaError::UnexpectedNode { path: path.child(key), found: "group" });
                }
            }
        }

        Ok(Self { cost_factor, settings, coefficients })
    }

    /// Coefficient whose key ends in `_{letter}_parameter`.
    pub fn coefficient(&self, letter: char) -> Option<(&str, &Parameter)> {
        let suffix = format!("_{}_parameter", letter);
        self.coefficients
            .iter()
            .find(|(key, _)| key.ends_with(&suffix))
            .map(|(key, parameter)| (key.as_str(), parameter))
    }

    /// Resolve coefficients a..d, each of which must be present and set.
    pub fn curve(&self) -> Result<CostCurve, AppError> {
        let resolve = |letter: char| -> Result<CurveCoefficient, AppError> {
            let (name, parameter) = self.coefficient(letter).ok_or_else(|| {
                AppError::IncompleteCostCurve { missing: format!("*_{}_parameter", letter) }
            })?;
            let value = parameter
                .value
                .as_f64()
                .ok_or_else(|| AppError::IncompleteCostCurve { missing: format!("value of {}", name) })?;
            Ok(CurveCoefficient { name: name.to_string(), value, units: parameter.units.clone() })
        };

        Ok(CostCurve { a: resolve('a')?, b: resolve('b')?, c: resolve('c')?, d: resolve('d')? })
    }
}
