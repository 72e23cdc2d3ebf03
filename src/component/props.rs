use crate::component::kind::ComponentKind;
use crate::result::{HudError, HudErrorKind, HudResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKey {
    Text,
    Label,
    Hint,
    Options,
    Submit,
}

impl PropKey {
    pub fn as_str(self) -> &'static str {
        match self {
            PropKey::Text => "text",
            PropKey::Label => "label",
            PropKey::Hint => "hint",
            PropKey::Options => "options",
            PropKey::Submit => "submit",
        }
    }
}

impl Display for PropKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    Text,
    Flag,
    List,
}

impl PropType {
    fn describe(self) -> &'static str {
        match self {
            PropType::Text => "a string",
            PropType::Flag => "a boolean",
            PropType::List => "a list of strings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl PropValue {
    pub fn prop_type(&self) -> PropType {
        match self {
            PropValue::Flag(_) => PropType::Flag,
            PropValue::Text(_) => PropType::Text,
            PropValue::List(_) => PropType::List,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropValue::List(list) => Some(list),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Flag(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for PropValue {
    fn from(values: Vec<S>) -> Self {
        PropValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Node specific fields, keyed by a closed set of prop names.
///
/// Serializes as a JSON object ordered by [`PropKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<PropKey, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: PropKey, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: PropKey, value: impl Into<PropValue>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: PropKey) -> Option<&PropValue> {
        self.0.get(&key)
    }

    pub fn text(&self, key: PropKey) -> Option<&str> {
        self.get(key).and_then(PropValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropKey, &PropValue)> {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    /// Rejects unknown keys, values of the wrong shape and missing required keys.
    pub fn validate(&self, kind: ComponentKind) -> HudResult<()> {
        let specs = kind.prop_specs();
        for (key, value) in self.iter() {
            let Some(spec) = specs.iter().find(|spec| spec.key == key) else {
                return Err(invalid_props(kind, format!("unknown prop '{}'", key)));
            };
            if value.prop_type() != spec.prop_type {
                return Err(invalid_props(
                    kind,
                    format!("prop '{}' must be {}", key, spec.prop_type.describe()),
                ));
            }
        }
        if let Some(missing) = specs
            .iter()
            .find(|spec| spec.required && !self.0.contains_key(&spec.key))
        {
            return Err(invalid_props(
                kind,
                format!("missing required prop '{}'", missing.key),
            ));
        }
        Ok(())
    }
}

fn invalid_props(kind: ComponentKind, message: String) -> HudError {
    HudError::new(HudErrorKind::InvalidProps {
        kind: kind.tag().to_string(),
        message,
    })
}
