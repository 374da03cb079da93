use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::domain::parameters::{Group, Node, ParamPath, Parameter, SchemaError};

/// Fraction of each constituent's mass removed by the unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalTable {
    fractions: BTreeMap<String, Parameter>,
    default: Option<f64>,
}

impl RemovalTable {
    pub fn new(fractions: BTreeMap<String, Parameter>, default: Option<f64>) -> Self {
        Self { fractions, default }
    }

    /// Build from a `removal_frac_mass_solute` group. Range checks already ran at load time.
    pub fn from_group(path: &ParamPath, group: &Group, default: Option<f64>) -> Result<Self, SchemaError> {
        let mut fractions = BTreeMap::new();
        for (solute, node) in group.iter() {
            match node {
                Node::Parameter(parameter) => {
                    fractions.insert(solute.to_string(), parameter.clone());
                }
                other => {
                    return Err(SchemaError::UnexpectedNode {
                        path: path.child(solute),
                        found: other.kind(),
                    });
                }
            }
        }
        Ok(Self { fractions, default })
    }

    pub fn fraction(&self, solute: &str) -> Option<f64> {
        self.fractions.get(solute).and_then(|parameter| parameter.value.as_f64())
    }

    pub fn display_name(&self, solute: &str) -> Option<&str> {
        self.fractions.get(solute).and_then(|parameter| parameter.constituent_longform.as_deref())
    }

    pub fn default_fraction(&self) -> Option<f64> {
        self.default
    }

    pub fn solutes(&self) -> impl Iterator<Item = &str> {
        self.fractions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.fractions.iter().map(|(solute, parameter)| (solute.as_str(), parameter))
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Removal fraction for each requested solute.
    ///
    /// Solutes without their own entry take the default fraction when
    /// `use_default_removal` is set; otherwise they are an error.
    pub fn resolve<S: AsRef<str>>(
        &self,
        solutes: &[S],
        use_default_removal: bool,
    ) -> Result<BTreeMap<String, f64>, AppError> {
        let mut resolved = BTreeMap::new();
        for solute in solutes {
            let solute = solute.as_ref();
            let fraction = match self.fraction(solute) {
                Some(fraction) => fraction,
                None if use_default_removal => self.default.ok_or(AppError::MissingDefaultRemoval)?,
                None => {
                    return Err(AppError::MissingRemovalFraction { solute: solute.to_string() });
                }
            };
            resolved.insert(solute.to_string(), fraction);
        }
        Ok(resolved)
    }
}
