use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::domain::parameters::{
    CAPITAL_COST_KEY, DEFAULT_SUBTYPE, Group, Node, NotFoundError, ParamPath, Parameter,
    ParameterStore, REMOVAL_TABLE_KEY, SchemaError, Setting,
};

use super::capital_cost::CapitalCost;
use super::removal::RemovalTable;

/// Key of the fallback removal fraction.
pub const DEFAULT_REMOVAL_KEY: &str = "default_removal_frac_mass_solute";

/// Typed view of one resolved subtype group.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitParameters {
    pub capital_cost: Option<CapitalCost>,
    pub removal: RemovalTable,
    /// Standalone top-level parameters, e.g. `energy_electric_flow_vol_inlet`.
    pub operating: BTreeMap<String, Parameter>,
    pub settings: BTreeMap<String, Setting>,
    pub groups: BTreeMap<String, Group>,
}

impl UnitParameters {
    /// View of `default` overlaid with the named subtypes.
    pub fn resolve<S: AsRef<str>>(store: &ParameterStore, subtypes: &[S]) -> Result<Self, AppError> {
        let group = store.resolve_subtypes(subtypes)?;
        let label: Vec<&str> = subtypes.iter().map(|s| s.as_ref()).collect();
        let path = if label.is_empty() {
            ParamPath::new(&[DEFAULT_SUBTYPE])
        } else {
            ParamPath::new(&[label.join("+")])
        };
        Self::from_group(&path, &group)
            .map_err(|source| AppError::schema_error(format!("subtype '{}'", path), source))
    }

    pub fn from_group(path: &ParamPath, group: &Group) -> Result<Self, SchemaError> {
        let default_removal = group.parameter(DEFAULT_REMOVAL_KEY).and_then(|p| p.value.as_f64());

        let mut capital_cost = None;
        let mut removal = RemovalTable::new(BTreeMap::new(), default_removal);
        let mut operating = BTreeMap::new();
        let mut settings = BTreeMap::new();
        let mut groups = BTreeMap::new();

        for (key, node) in group.iter() {
            let child = path.child(key);
            match (key, node) {
                (CAPITAL_COST_KEY, Node::Group(block)) => {
                    capital_cost = Some(CapitalCost::from_group(&child, block)?);
                }
                (REMOVAL_TABLE_KEY, Node::Group(table)) => {
                    removal = RemovalTable::from_group(&child, table, default_removal)?;
                }
                (CAPITAL_COST_KEY | REMOVAL_TABLE_KEY, other) => {
                    return Err(SchemaError::UnexpectedNode { path: child, found: other.kind() });
                }
                (DEFAULT_REMOVAL_KEY, Node::Parameter(_)) => {}
                (_, Node::Parameter(parameter)) => {
                    operating.insert(key.to_string(), parameter.clone());
                }
                (_, Node::Setting(setting)) => {
                    settings.insert(key.to_string(), setting.clone());
                }
                (_, Node::Group(nested)) => {
                    groups.insert(key.to_string(), nested.clone());
                }
            }
        }

        Ok(Self { capital_cost, removal, operating, settings, groups })
    }

    pub fn operating(&self, name: &str) -> Result<&Parameter, NotFoundError> {
        self.operating.get(name).ok_or_else(|| NotFoundError::MissingEntry {
            parent: ParamPath::root(),
            segment: name.to_string(),
        })
    }

    /// Numeric value of an operating parameter; the `None` sentinel is an error here.
    pub fn operating_value(&self, name: &str) -> Result<f64, AppError> {
        self.operating(name)?.value.as_f64().ok_or_else(|| AppError::UnsetValue(name.to_string()))
    }
}
