use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::rule::Rule;

/// Modern launch arguments, introduced alongside 1.13.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Arguments {
    pub game: Vec<Argument>,
    pub jvm: Vec<Argument>,
}

/// One launch argument.
///
/// On the wire this is either a bare string or an object carrying a `value`
/// (string or array of strings) and optional `rules`. Both decode into this
/// one shape; `value` is never empty.
///
/// Serializing directly always produces the verbose object form. The compact
/// form is available through [`crate::json::codec::ArgumentStyle::Compact`].
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub rules: Vec<Rule>,
    pub value: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("expected a string or an object, found {0}")]
    UnexpectedNode(&'static str),
    #[error("argument object has no `value`")]
    MissingValue,
    #[error("argument `value` must be a string or an array of strings, found {0}")]
    InvalidValue(&'static str),
    #[error("argument `value` array is empty")]
    EmptyValue,
    #[error("argument `value` element {index} is {found}, not a string")]
    InvalidValueElement { index: usize, found: &'static str },
    #[error("invalid argument rules : {0}")]
    Rules(#[source] serde_json::Error),
}

impl ArgumentError {
    /// True when the node itself has an unusable shape. Broken `rules` are
    /// reported as a malformed document instead.
    pub fn is_shape(&self) -> bool {
        !matches!(self, ArgumentError::Rules(_))
    }
}

impl Argument {
    /// A plain argument with no conditions.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            value: vec![value.into()],
        }
    }

    /// Decodes one element of `arguments.game` or `arguments.jvm`.
    pub fn from_value(node: &Value) -> Result<Self, ArgumentError> {
        match node {
            Value::String(s) => Ok(Self::plain(s.clone())),
            Value::Object(object) => {
                let value = argument_value(object)?;
                let rules = match object.get("rules") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(rules) => {
                        Vec::<Rule>::deserialize(rules).map_err(ArgumentError::Rules)?
                    }
                };
                Ok(Self { rules, value })
            }
            other => Err(ArgumentError::UnexpectedNode(kind_of(other))),
        }
    }

    pub fn is_conditional(&self) -> bool {
        !self.rules.is_empty()
    }
}

fn argument_value(object: &Map<String, Value>) -> Result<Vec<String>, ArgumentError> {
    match object.get("value") {
        None => Err(ArgumentError::MissingValue),
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(items)) if items.is_empty() => Err(ArgumentError::EmptyValue),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(ArgumentError::InvalidValueElement {
                    index,
                    found: kind_of(other),
                }),
            })
            .collect(),
        Some(other) => Err(ArgumentError::InvalidValue(kind_of(other))),
    }
}

impl<'de> Deserialize<'de> for Argument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;
        Argument::from_value(&node).map_err(de::Error::custom)
    }
}

/// Rewrites one verbose argument node into the shortest equivalent form.
pub(crate) fn compact(node: &mut Value) {
    let Value::Object(object) = &mut *node else {
        return;
    };

    let has_rules = match object.get("rules") {
        Some(Value::Array(rules)) => !rules.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    };

    let single = match object.get("value") {
        Some(Value::Array(values)) if values.len() == 1 => values.first().cloned(),
        _ => None,
    };

    match (has_rules, single) {
        (false, Some(value)) => *node = value,
        (has_rules, single) => {
            if !has_rules {
                object.remove("rules");
            }
            if let Some(value) = single {
                object.insert("value".to_string(), value);
            }
        }
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
