use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Literal used in documents for "no value provided".
pub const UNSET_SENTINEL: &str = "None";

/// Numeric value of a parameter, or the `None` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Unset,
}

impl ParamValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(value) => Some(*value),
            ParamValue::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ParamValue::Unset)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(value) => write!(f, "{}", value),
            ParamValue::Unset => write!(f, "{}", UNSET_SENTINEL),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Number(value) => serializer.serialize_f64(*value),
            ParamValue::Unset => serializer.serialize_none(),
        }
    }
}

/// A named scalar with units and optional annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub value: ParamValue,
    pub units: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constituent_longform: Option<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, String>,
}

impl Parameter {
    pub fn new(value: ParamValue, units: impl Into<String>) -> Self {
        Self { value, units: units.into(), constituent_longform: None, metadata: BTreeMap::new() }
    }

    /// Leaf field by name: `value`, `units`, `constituent_longform`, or a metadata key.
    pub fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "value" => Some(Field::Value(self.value)),
            "units" => Some(Field::Text(&self.units)),
            "constituent_longform" => self.constituent_longform.as_deref().map(Field::Text),
            other => self.metadata.get(other).map(|text| Field::Text(text)),
        }
    }
}

/// A leaf field of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Value(ParamValue),
    Text(&'a str),
}

/// A bare scalar inside a group, e.g. `cost_factor: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Text(String),
    Unset,
}

impl Setting {
    pub fn from_text(text: &str) -> Self {
        if text == UNSET_SENTINEL { Setting::Unset } else { Setting::Text(text.to_string()) }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Setting::Text(text) => Some(text),
            Setting::Unset => None,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Text(text) => write!(f, "{}", text),
            Setting::Unset => write!(f, "{}", UNSET_SENTINEL),
        }
    }
}

impl Serialize for Setting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Setting::Text(text) => serializer.serialize_str(text),
            Setting::Unset => serializer.serialize_none(),
        }
    }
}

/// One entry of a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Group(Group),
    Parameter(Parameter),
    Setting(Setting),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Group(_) => "group",
            Node::Parameter(_) => "parameter",
            Node::Setting(_) => "setting",
        }
    }
}

/// A mapping of named entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Group {
    entries: BTreeMap<String, Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        self.entries.insert(key.into(), node);
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn parameter(&self, key: &str) -> Option<&Parameter> {
        match self.entries.get(key) {
            Some(Node::Parameter(parameter)) => Some(parameter),
            _ => None,
        }
    }

    pub fn group(&self, key: &str) -> Option<&Group> {
        match self.entries.get(key) {
            Some(Node::Group(group)) => Some(group),
            _ => None,
        }
    }

    pub fn setting(&self, key: &str) -> Option<&Setting> {
        match self.entries.get(key) {
            Some(Node::Setting(setting)) => Some(setting),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.iter().filter_map(|(key, node)| match node {
            Node::Parameter(parameter) => Some((key, parameter)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace this group's top-level entries with those of `other`.
    pub fn overlay(&mut self, other: &Group) {
        for (key, node) in &other.entries {
            self.entries.insert(key.clone(), node.clone());
        }
    }
}

/// Result of resolving a path: any node, or a leaf field of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Group(&'a Group),
    Parameter(&'a Parameter),
    Setting(&'a Setting),
    Field(Field<'a>),
}

impl<'a> Entry<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Group(_) => "group",
            Entry::Parameter(_) => "parameter",
            Entry::Setting(_) => "setting",
            Entry::Field(_) => "field",
        }
    }

    pub(crate) fn from_node(node: &'a Node) -> Self {
        match node {
            Node::Group(group) => Entry::Group(group),
            Node::Parameter(parameter) => Entry::Parameter(parameter),
            Node::Setting(setting) => Entry::Setting(setting),
        }
    }
}
