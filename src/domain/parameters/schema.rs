//! Validation of raw YAML into the parameter tree.

use serde_yaml::{Mapping, Value};

use super::error::SchemaError;
use super::model::{Group, Node, ParamValue, Parameter, Setting, UNSET_SENTINEL};
use super::path::ParamPath;

/// Group whose parameters are all removal fractions.
pub const REMOVAL_TABLE_KEY: &str = "removal_frac_mass_solute";

/// Group holding the cost-curve settings and coefficients.
pub const CAPITAL_COST_KEY: &str = "capital_cost";

/// Standalone parameters that are fractions.
pub const FRACTION_PARAMETER_KEYS: &[&str] =
    &["default_removal_frac_mass_solute", "recovery_frac_mass_H2O"];

const VALUE_KEY: &str = "value";
const UNITS_KEY: &str = "units";
const LONGFORM_KEY: &str = "constituent_longform";

/// What the children of a group may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Plain,
    /// Only fraction parameters.
    FractionTable,
    /// Settings and parameters, no nested groups.
    CostBlock,
}

impl GroupKind {
    fn of(path: &ParamPath) -> Self {
        match path.key() {
            Some(REMOVAL_TABLE_KEY) => Self::FractionTable,
            Some(CAPITAL_COST_KEY) => Self::CostBlock,
            _ => Self::Plain,
        }
    }
}

/// Parse a full document: a mapping of process subtypes to groups.
pub fn parse_document(content: &str) -> Result<Group, SchemaError> {
    let root: Value = serde_yaml::from_str(content)?;
    let Value::Mapping(map) = root else {
        return Err(SchemaError::RootNotMapping { found: value_kind(&root) });
    };

    let root_path = ParamPath::root();
    let mut subtypes = Group::new();
    for (key, value) in &map {
        let key = key_text(key, &root_path)?;
        let path = root_path.child(key);
        match build_node(&path, value, GroupKind::Plain)? {
            Node::Group(group) => subtypes.insert(key, Node::Group(group)),
            other => return Err(SchemaError::UnexpectedNode { path, found: other.kind() }),
        }
    }
    Ok(subtypes)
}

fn build_node(path: &ParamPath, value: &Value, parent: GroupKind) -> Result<Node, SchemaError> {
    let key = path.key().unwrap_or_default();
    let is_fraction = parent == GroupKind::FractionTable
        || FRACTION_PARAMETER_KEYS.iter().any(|name| *name == key);
    let misplaced = |found: &'static str| SchemaError::UnexpectedNode { path: path.clone(), found };

    match value {
        Value::Mapping(map) if is_parameter(map) && GroupKind::of(path) != GroupKind::Plain => {
            Err(misplaced("parameter"))
        }
        Value::Mapping(map) if is_parameter(map) => {
            let parameter = build_parameter(path, map)?;
            if is_fraction {
                check_fraction(path, &parameter)?;
            }
            Ok(Node::Parameter(parameter))
        }
        Value::Mapping(_) if is_fraction || parent == GroupKind::CostBlock => Err(misplaced("group")),
        Value::Mapping(map) => build_group(path, map, GroupKind::of(path)).map(Node::Group),
        Value::String(_) | Value::Null if is_fraction || GroupKind::of(path) != GroupKind::Plain => {
            Err(misplaced("setting"))
        }
        Value::String(text) => Ok(Node::Setting(Setting::from_text(text))),
        Value::Null => Ok(Node::Setting(Setting::Unset)),
        other => Err(misplaced(value_kind(other))),
    }
}

fn build_group(path: &ParamPath, map: &Mapping, kind: GroupKind) -> Result<Group, SchemaError> {
    let mut group = Group::new();
    for (key, value) in map {
        let key = key_text(key, path)?;
        let node = build_node(&path.child(key), value, kind)?;
        group.insert(key, node);
    }
    Ok(group)
}

fn build_parameter(path: &ParamPath, map: &Mapping) -> Result<Parameter, SchemaError> {
    let raw_value = map
        .get(VALUE_KEY)
        .ok_or_else(|| SchemaError::MissingKey { path: path.clone(), key: VALUE_KEY })?;
    let raw_units = map
        .get(UNITS_KEY)
        .ok_or_else(|| SchemaError::MissingKey { path: path.clone(), key: UNITS_KEY })?;

    let mut parameter = Parameter::new(parse_value(path, raw_value)?, parse_units(path, raw_units)?);

    for (key, value) in map {
        let key = key_text(key, path)?;
        if key == VALUE_KEY || key == UNITS_KEY {
            continue;
        }
        let Value::String(text) = value else {
            return Err(SchemaError::InvalidMetadata { path: path.clone(), key: key.to_string() });
        };
        if key == LONGFORM_KEY {
            parameter.constituent_longform = Some(text.clone());
        } else {
            parameter.metadata.insert(key.to_string(), text.clone());
        }
    }

    Ok(parameter)
}

fn parse_value(path: &ParamPath, value: &Value) -> Result<ParamValue, SchemaError> {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(value) if value.is_finite() => Ok(ParamValue::Number(value)),
            _ => Err(SchemaError::NonNumericValue { path: path.clone(), found: number.to_string() }),
        },
        Value::String(text) if text == UNSET_SENTINEL => Ok(ParamValue::Unset),
        Value::Null => Ok(ParamValue::Unset),
        Value::String(text) => {
            Err(SchemaError::NonNumericValue { path: path.clone(), found: format!("'{}'", text) })
        }
        other => Err(SchemaError::NonNumericValue {
            path: path.clone(),
            found: value_kind(other).to_string(),
        }),
    }
}

fn parse_units(path: &ParamPath, value: &Value) -> Result<String, SchemaError> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Value::String(_) => {
            Err(SchemaError::InvalidUnits { path: path.clone(), reason: "empty units".to_string() })
        }
        other => Err(SchemaError::InvalidUnits {
            path: path.clone(),
            reason: format!("expected text, found {}", value_kind(other)),
        }),
    }
}

fn check_fraction(path: &ParamPath, parameter: &Parameter) -> Result<(), SchemaError> {
    match parameter.value {
        ParamValue::Number(value) if (0.0..=1.0).contains(&value) => Ok(()),
        ParamValue::Number(value) => Err(SchemaError::FractionOutOfRange { path: path.clone(), value }),
        ParamValue::Unset => Err(SchemaError::UnsetFraction { path: path.clone() }),
    }
}

fn is_parameter(map: &Mapping) -> bool {
    map.contains_key(VALUE_KEY) || map.contains_key(UNITS_KEY)
}

fn key_text<'a>(key: &'a Value, parent: &ParamPath) -> Result<&'a str, SchemaError> {
    match key {
        Value::String(text) => Ok(text),
        _ => Err(SchemaError::NonTextKey { path: parent.clone() }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
