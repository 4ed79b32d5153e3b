//! Formula arguments
//!
//! Arguments arrive as one JSON object keyed by parameter name. `null` is
//! treated like an omitted argument.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Arguments of one formula invocation
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: JsonObject,
}

impl Args {
    /// Wrap an argument object; `null` means no arguments
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(Self::default()),
            JsonValue::Object(values) => Ok(Self {
                values: values.clone(),
            }),
            other => Err(Error::invalid_input(format!(
                "Formula arguments must be a JSON object, got: {other}"
            ))),
        }
    }

    fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// A required string argument
    pub fn string(&self, name: &str) -> Result<String> {
        self.optional_string(name)?
            .ok_or_else(|| Error::missing_parameter(name))
    }

    /// An optional string argument
    pub fn optional_string(&self, name: &str) -> Result<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(JsonValue::String(s)) => Ok(Some(s.clone())),
            // Numeric ids are common for projects
            Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(Error::invalid_input(format!(
                "Parameter {name} must be a string"
            ))),
        }
    }

    /// An optional boolean argument, `false` when omitted
    pub fn flag(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            None => Ok(false),
            Some(JsonValue::Bool(b)) => Ok(*b),
            Some(_) => Err(Error::invalid_input(format!(
                "Parameter {name} must be a boolean"
            ))),
        }
    }

    /// A required array of strings
    pub fn strings(&self, name: &str) -> Result<Vec<String>> {
        let Some(value) = self.get(name) else {
            return Err(Error::missing_parameter(name));
        };
        let invalid = || Error::invalid_input(format!("Parameter {name} must be an array of strings"));

        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|item| item.as_str().map(ToString::to_string).ok_or_else(invalid))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_and_flags() {
        let args = Args::from_value(&json!({
            "fileUrl": "https://www.figma.com/file/ABC/x",
            "projectId": 123,
            "includeBranchData": true,
            "nodeIds": null,
            "names": ["a", "b"]
        }))
        .unwrap();

        assert_eq!(args.string("fileUrl").unwrap(), "https://www.figma.com/file/ABC/x");
        assert_eq!(args.string("projectId").unwrap(), "123");
        assert_eq!(args.optional_string("nodeIds").unwrap(), None);
        assert!(args.flag("includeBranchData").unwrap());
        assert!(!args.flag("other").unwrap());
        assert_eq!(args.strings("names").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_and_mistyped() {
        let args = Args::from_value(&json!({"names": ["a", 1], "flag": "yes"})).unwrap();

        assert!(matches!(
            args.string("teamUrl"),
            Err(Error::MissingParameter { name }) if name == "teamUrl"
        ));
        assert_eq!(
            args.strings("names").unwrap_err().to_string(),
            "Parameter names must be an array of strings"
        );
        assert!(args.flag("flag").is_err());
        assert!(args.strings("urls").is_err());
    }

    #[test]
    fn test_non_object_arguments() {
        assert!(Args::from_value(&JsonValue::Null).is_ok());
        assert!(Args::from_value(&json!(["x"])).is_err());
    }
}
