//! JSON schema definitions for instances and proposals.
//!
//! Field names follow the host application's payloads so files exported
//! from it can be read without translation.

use log::warn;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical custom attribute id
pub type AttributeId = u64;

/// Declared type of a custom attribute
///
/// Only `Date` and `Checkbox` get special formatting; every other declared
/// type is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    Date,
    Checkbox,
    Other(String),
}

impl From<String> for AttributeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Date" => AttributeType::Date,
            "Checkbox" => AttributeType::Checkbox,
            _ => AttributeType::Other(value),
        }
    }
}

impl From<&str> for AttributeType {
    fn from(value: &str) -> Self {
        AttributeType::from(value.to_string())
    }
}

impl From<AttributeType> for String {
    fn from(value: AttributeType) -> Self {
        match value {
            AttributeType::Date => "Date".to_string(),
            AttributeType::Checkbox => "Checkbox".to_string(),
            AttributeType::Other(name) => name,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Date => f.write_str("Date"),
            AttributeType::Checkbox => f.write_str("Checkbox"),
            AttributeType::Other(name) => f.write_str(name),
        }
    }
}

/// A scalar attribute value as it appears in JSON payloads
///
/// JSON `null` and missing fields are represented by `Option::None`
/// at the use site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl AttributeValue {
    /// Whether the value counts as present (`false`, `0` and `""` do not)
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Bool(b) => *b,
            AttributeValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            AttributeValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value.into())
    }
}

/// Definition of a custom attribute (title and declared type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeDefinition {
    pub id: AttributeId,
    pub title: String,
    pub attribute_type: AttributeType,
}

impl CustomAttributeDefinition {
    pub fn new(id: AttributeId, title: impl Into<String>, attribute_type: impl Into<AttributeType>) -> Self {
        Self {
            id,
            title: title.into(),
            attribute_type: attribute_type.into(),
        }
    }
}

/// Current value of a custom attribute on an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAttributeValue {
    pub custom_attribute_id: AttributeId,

    #[serde(default)]
    pub attribute_value: Option<AttributeValue>,
}

impl CustomAttributeValue {
    pub fn new(custom_attribute_id: AttributeId, attribute_value: impl Into<AttributeValue>) -> Self {
        Self {
            custom_attribute_id,
            attribute_value: Some(attribute_value.into()),
        }
    }
}

/// Identity of an instance, used to scope refresh events
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceKey {
    #[serde(rename = "type")]
    pub instance_type: String,
    pub id: u64,
}

impl InstanceKey {
    pub fn new(instance_type: impl Into<String>, id: u64) -> Self {
        Self {
            instance_type: instance_type.into(),
            id,
        }
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.instance_type, self.id)
    }
}

/// The object under review, with its attribute definitions and values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentInstance {
    #[serde(rename = "type")]
    pub instance_type: String,

    pub id: u64,

    #[serde(default)]
    pub custom_attribute_definitions: Vec<CustomAttributeDefinition>,

    #[serde(default)]
    pub custom_attribute_values: Vec<CustomAttributeValue>,
}

impl CurrentInstance {
    pub fn new(instance_type: impl Into<String>, id: u64) -> Self {
        Self {
            instance_type: instance_type.into(),
            id,
            custom_attribute_definitions: Vec::new(),
            custom_attribute_values: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: CustomAttributeDefinition) -> Self {
        self.custom_attribute_definitions.push(definition);
        self
    }

    pub fn with_value(mut self, value: CustomAttributeValue) -> Self {
        self.custom_attribute_values.push(value);
        self
    }

    pub fn key(&self) -> InstanceKey {
        InstanceKey::new(self.instance_type.clone(), self.id)
    }
}

/// A proposed value for one attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifiedAttribute {
    #[serde(default)]
    pub attribute_value: Option<AttributeValue>,
}

impl ModifiedAttribute {
    pub fn new(attribute_value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute_value: Some(attribute_value.into()),
        }
    }

    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Proposed attribute values, ordered by ascending attribute id
///
/// Payload keys arrive as strings; they are normalized to `AttributeId`
/// during deserialization. Keys that are not ids are dropped, since they
/// could never match a definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModifiedAttributes(BTreeMap<AttributeId, ModifiedAttribute>);

impl ModifiedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: AttributeId, attribute: ModifiedAttribute) -> Option<ModifiedAttribute> {
        self.0.insert(id, attribute)
    }

    pub fn with(mut self, id: AttributeId, attribute: ModifiedAttribute) -> Self {
        self.insert(id, attribute);
        self
    }

    pub fn get(&self, id: AttributeId) -> Option<&ModifiedAttribute> {
        self.0.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = AttributeId> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, &ModifiedAttribute)> {
        self.0.iter().map(|(id, attr)| (*id, attr))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AttributeId, ModifiedAttribute)> for ModifiedAttributes {
    fn from_iter<I: IntoIterator<Item = (AttributeId, ModifiedAttribute)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for ModifiedAttributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, Option<ModifiedAttribute>> = BTreeMap::deserialize(deserializer)?;

        // id -> (attribute, came from the canonical "<id>" key)
        let mut attributes: BTreeMap<AttributeId, (ModifiedAttribute, bool)> = BTreeMap::new();
        for (key, attribute) in raw {
            let Some(id) = normalize_attribute_id(&key) else {
                warn!("Skipping modified attribute with non-numeric id {:?}", key);
                continue;
            };
            let canonical = key == id.to_string();
            let attribute = attribute.unwrap_or_default();

            match attributes.get(&id) {
                None => {
                    attributes.insert(id, (attribute, canonical));
                }
                Some((_, kept_canonical)) => {
                    let replace = canonical && !kept_canonical;
                    warn!(
                        "Modified attribute keys collide on id {} (key {:?}), keeping the {} entry",
                        id,
                        key,
                        if replace || *kept_canonical { "canonical" } else { "first" }
                    );
                    if replace {
                        attributes.insert(id, (attribute, canonical));
                    }
                }
            }
        }

        Ok(Self(
            attributes
                .into_iter()
                .map(|(id, (attribute, _))| (id, attribute))
                .collect(),
        ))
    }
}

/// Coerce a payload key to an attribute id
///
/// Accepts plain integers ("12", " 12 ") and integral decimals ("12.0").
pub fn normalize_attribute_id(key: &str) -> Option<AttributeId> {
    let key = key.trim();
    if let Ok(id) = key.parse::<AttributeId>() {
        return Some(id);
    }

    let value = key.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as AttributeId)
    } else {
        None
    }
}

/// Proposal content as stored by the host application
///
/// Only the custom attribute section is used; other sections
/// (plain fields, mappings) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(default)]
    pub custom_attribute_values: ModifiedAttributes,
}
