//! Declared schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value type of a declared property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Number => write!(f, "number"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Object => write!(f, "object"),
            ValueType::Array => write!(f, "array"),
        }
    }
}

/// Rendering hint for a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueHint {
    ImageReference,
    DateTime,
    Url,
    /// Points at a row of another sync table
    Reference,
}

/// Declared property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub value_type: ValueType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<ValueHint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<Box<ObjectSchema>>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            hint: None,
            description: None,
            required: false,
            optional: false,
            object: None,
            items: None,
        }
    }

    /// Plain string property
    pub fn string() -> Self {
        Self::new(ValueType::String)
    }

    /// Plain number property
    pub fn number() -> Self {
        Self::new(ValueType::Number)
    }

    /// Nested object property
    pub fn object(schema: ObjectSchema) -> Self {
        let mut property = Self::new(ValueType::Object);
        if schema.identity.is_some() {
            property.hint = Some(ValueHint::Reference);
        }
        property.object = Some(Box::new(schema));
        property
    }

    /// Array property
    pub fn array(items: PropertySchema) -> Self {
        let mut property = Self::new(ValueType::Array);
        property.items = Some(Box::new(items));
        property
    }

    /// Set the rendering hint
    #[must_use]
    pub fn hint(mut self, hint: ValueHint) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Set the description
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark as always present
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as possibly absent
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Declared object schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    pub properties: BTreeMap<String, PropertySchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_property: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_property: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_property: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtitle_properties: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_property: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub featured_properties: Vec<String>,

    /// Identity of the sync table a reference points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

impl ObjectSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Set the id property
    #[must_use]
    pub fn id(mut self, name: impl Into<String>) -> Self {
        self.id_property = Some(name.into());
        self
    }

    /// Set the display property
    #[must_use]
    pub fn display(mut self, name: impl Into<String>) -> Self {
        self.display_property = Some(name.into());
        self
    }

    /// Set the title property
    #[must_use]
    pub fn title(mut self, name: impl Into<String>) -> Self {
        self.title_property = Some(name.into());
        self
    }

    /// Set the subtitle properties
    #[must_use]
    pub fn subtitles(mut self, names: &[&str]) -> Self {
        self.subtitle_properties = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the image property
    #[must_use]
    pub fn image(mut self, name: impl Into<String>) -> Self {
        self.image_property = Some(name.into());
        self
    }

    /// Set the featured properties
    #[must_use]
    pub fn featured(mut self, names: &[&str]) -> Self {
        self.featured_properties = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Make this schema a reference to the named sync table identity
    #[must_use]
    pub fn identity(mut self, name: impl Into<String>) -> Self {
        self.identity = Some(name.into());
        self
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }

    /// Names of properties carrying the given hint
    pub fn hinted(&self, hint: ValueHint) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|(_, p)| p.hint == Some(hint))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
