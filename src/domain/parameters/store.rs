use super::error::{NotFoundError, SchemaError};
use super::model::{Entry, Field, Group, Node, ParamValue, Parameter};
use super::path::ParamPath;
use super::schema;

/// Subtype every document is resolved against.
pub const DEFAULT_SUBTYPE: &str = "default";

/// An immutable, validated parameter document.
///
/// Top-level keys are process subtypes; `default` holds the base parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    root: Group,
}

impl ParameterStore {
    /// Parse and validate YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, SchemaError> {
        Ok(Self { root: schema::parse_document(content)? })
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Names of the process subtypes defined by this document.
    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    pub fn subtype(&self, name: &str) -> Result<&Group, NotFoundError> {
        self.root.group(name).ok_or_else(|| NotFoundError::MissingEntry {
            parent: ParamPath::root(),
            segment: name.to_string(),
        })
    }

    /// Resolve a path to any entry, descending into parameter fields for the last segment.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Result<Entry<'_>, NotFoundError> {
        if path.is_empty() {
            return Err(NotFoundError::EmptyPath);
        }

        let mut current = Entry::Group(&self.root);
        let mut walked = ParamPath::root();
        for segment in path {
            let segment = segment.as_ref();
            let missing =
                || NotFoundError::MissingEntry { parent: walked.clone(), segment: segment.to_string() };
            current = match current {
                Entry::Group(group) => group.get(segment).map(Entry::from_node).ok_or_else(missing)?,
                Entry::Parameter(parameter) => {
                    parameter.field(segment).map(Entry::Field).ok_or_else(missing)?
                }
                Entry::Setting(_) | Entry::Field(_) => return Err(missing()),
            };
            walked = walked.child(segment);
        }
        Ok(current)
    }

    /// Resolve a path to a parameter. A path ending in one of its fields
    /// (`value`, `units`, ...) yields the owning parameter.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<&Parameter, NotFoundError> {
        match self.lookup(path)? {
            Entry::Parameter(parameter) => Ok(parameter),
            Entry::Field(_) => match self.lookup(&path[..path.len() - 1])? {
                Entry::Parameter(parameter) => Ok(parameter),
                other => Err(NotFoundError::WrongKind {
                    path: ParamPath::new(path),
                    found: other.kind(),
                    expected: "parameter",
                }),
            },
            other => Err(NotFoundError::WrongKind {
                path: ParamPath::new(path),
                found: other.kind(),
                expected: "parameter",
            }),
        }
    }

    /// Value of a parameter path, or of a path ending in its `value` field.
    pub fn value<S: AsRef<str>>(&self, path: &[S]) -> Result<ParamValue, NotFoundError> {
        match self.lookup(path)? {
            Entry::Parameter(parameter) => Ok(parameter.value),
            Entry::Field(Field::Value(value)) => Ok(value),
            other => Err(NotFoundError::WrongKind {
                path: ParamPath::new(path),
                found: other.kind(),
                expected: "parameter value",
            }),
        }
    }

    /// `default` overlaid, in order, with the top-level entries of each named subtype.
    pub fn resolve_subtypes<S: AsRef<str>>(&self, subtypes: &[S]) -> Result<Group, NotFoundError> {
        let mut resolved = self.subtype(DEFAULT_SUBTYPE)?.clone();
        for name in subtypes {
            let name = name.as_ref();
            if name == DEFAULT_SUBTYPE {
                continue;
            }
            resolved.overlay(self.subtype(name)?);
        }
        Ok(resolved)
    }

    /// Walk every parameter in key order, yielding its full path.
    pub fn parameters(&self) -> Vec<(ParamPath, &Parameter)> {
        let mut found = Vec::new();
        collect_parameters(&self.root, &ParamPath::root(), &mut found);
        found
    }
}

fn collect_parameters<'a>(
    group: &'a Group,
    path: &ParamPath,
    found: &mut Vec<(ParamPath, &'a Parameter)>,
) {
    for (key, node) in group.iter() {
        match node {
            Node::Group(child) => collect_parameters(child, &path.child(key), found),
            Node::Parameter(parameter) => found.push((path.child(key), parameter)),
            Node::Setting(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::model::Setting;

    const DOC: &str = r#"
default:
  capital_cost:
    cost_factor: None
    unit_capital_a_parameter:
      value: 10.5
      units: USD_2014
  removal_frac_mass_solute:
    toc:
      value: 0.1
      units: dimensionless
      constituent_longform: Total Organic Carbon
  flow_factor:
    value: 2
    units: dimensionless
high_dose:
  flow_factor:
    value: 3
    units: dimensionless
"#;

    fn store() -> ParameterStore {
        ParameterStore::from_yaml_str(DOC).unwrap()
    }

    #[test]
    fn lookup_descends_into_fields() {
        let store = store();
        let entry = store.lookup(&["default", "capital_cost", "unit_capital_a_parameter", "value"]);
        assert_eq!(entry.unwrap(), Entry::Field(Field::Value(ParamValue::Number(10.5))));

        let units = store.lookup(&["default", "capital_cost", "unit_capital_a_parameter", "units"]);
        assert_eq!(units.unwrap(), Entry::Field(Field::Text("USD_2014")));

        let setting = store.lookup(&["default", "capital_cost", "cost_factor"]).unwrap();
        assert_eq!(setting, Entry::Setting(&Setting::Unset));
    }

    #[test]
    fn lookup_reports_deepest_resolved_parent() {
        let err = store().lookup(&["default", "capital_cost", "missing"]).unwrap_err();
        assert_eq!(
            err,
            NotFoundError::MissingEntry {
                parent: ParamPath::new(&["default", "capital_cost"]),
                segment: "missing".to_string(),
            }
        );
    }

    #[test]
    fn lookup_past_a_field_fails() {
        let err = store().lookup(&["default", "flow_factor", "value", "deeper"]).unwrap_err();
        assert!(matches!(err, NotFoundError::MissingEntry { .. }));
    }

    #[test]
    fn empty_path_fails() {
        let empty: [&str; 0] = [];
        assert_eq!(store().lookup(&empty).unwrap_err(), NotFoundError::EmptyPath);
    }

    #[test]
    fn get_requires_a_parameter() {
        let store = store();
        assert_eq!(store.get(&["default", "flow_factor"]).unwrap().units, "dimensionless");

        let setting = store.get(&["default", "capital_cost", "cost_factor"]).unwrap_err();
        assert!(matches!(setting, NotFoundError::WrongKind { found: "setting", .. }));

        let err = store.get(&["default", "capital_cost"]).unwrap_err();
        assert!(matches!(err, NotFoundError::WrongKind { found: "group", .. }));
    }

    #[test]
    fn get_through_a_field_returns_its_parameter() {
        let store = store();
        let parameter =
            store.get(&["default", "capital_cost", "unit_capital_a_parameter", "value"]).unwrap();
        assert_eq!(parameter.value, ParamValue::Number(10.5));
        assert_eq!(parameter.units, "USD_2014");

        let by_units = store.get(&["default", "flow_factor", "units"]).unwrap();
        assert_eq!(by_units.value, ParamValue::Number(2.0));

        let err = store.get(&["default", "flow_factor", "reference"]).unwrap_err();
        assert!(matches!(err, NotFoundError::MissingEntry { ref segment, .. } if segment == "reference"));
    }

    #[test]
    fn value_accepts_parameter_or_value_field() {
        let store = store();
        assert_eq!(store.value(&["default", "flow_factor"]).unwrap(), ParamValue::Number(2.0));
        assert_eq!(
            store.value(&["default", "flow_factor", "value"]).unwrap(),
            ParamValue::Number(2.0)
        );
        assert!(store.value(&["default", "flow_factor", "units"]).is_err());
    }

    #[test]
    fn resolve_subtypes_overlays_in_order() {
        let store = store();
        let resolved = store.resolve_subtypes(&["high_dose"]).unwrap();
        assert_eq!(resolved.parameter("flow_factor").unwrap().value, ParamValue::Number(3.0));
        assert!(resolved.group("capital_cost").is_some());

        let default_only = store.resolve_subtypes::<&str>(&[]).unwrap();
        assert_eq!(default_only.parameter("flow_factor").unwrap().value, ParamValue::Number(2.0));
    }

    #[test]
    fn resolve_unknown_subtype_fails() {
        let err = store().resolve_subtypes(&["low_dose"]).unwrap_err();
        assert!(matches!(err, NotFoundError::MissingEntry { ref segment, .. } if segment == "low_dose"));
    }

    #[test]
    fn parameters_lists_full_paths() {
        let store = store();
        let paths: Vec<String> = store.parameters().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "default.capital_cost.unit_capital_a_parameter",
                "default.flow_factor",
                "default.removal_frac_mass_solute.toc",
                "high_dose.flow_factor",
            ]
        );
    }
}
