//! Stack configuration model

use cfn_cloud::StackParameter;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Declarative description of one stack, loaded from `stacks/<cascade>.yml`
///
/// ```yaml
/// name: web-prod
/// parameters:
///   InstanceType: t3.small
///   DesiredCount: 2
/// values:
///   vpc_cidr: 10.0.0.0/16
///   subnets: [a, b]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StackConfig {
    /// Cloud-side stack name
    pub name: String,

    /// Provider parameters; scalar YAML values are stringified
    #[serde(default, deserialize_with = "deserialize_parameters")]
    pub parameters: BTreeMap<String, String>,

    /// Template substitution variables
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl StackConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Provider parameter list, in key order
    pub fn stack_parameters(&self) -> Vec<StackParameter> {
        self.parameters
            .iter()
            .map(|(key, value)| StackParameter::new(key, value))
            .collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_parameters<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    // `parameters:` with nothing under it
    let raw: Option<BTreeMap<String, serde_yaml::Value>> = Option::deserialize(deserializer)?;

    raw.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Null => String::new(),
                other => {
                    return Err(D::Error::custom(format!(
                        "parameter `{key}` must be a scalar, got {other:?}"
                    )));
                }
            };
            Ok((key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = StackConfig::from_yaml("name: web\n").unwrap();
        assert_eq!(config.name, "web");
        assert!(config.parameters.is_empty());
        assert!(config.values.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = StackConfig::from_yaml(
            r#"
name: web-prod
parameters:
  InstanceType: t3.small
  DesiredCount: 2
  PublicIp: true
values:
  cidr: 10.0.0.0/16
  subnets:
    - a
    - b
"#,
        )
        .unwrap();

        assert_eq!(config.name, "web-prod");
        assert_eq!(config.parameters["DesiredCount"], "2");
        assert_eq!(config.parameters["PublicIp"], "true");
        assert_eq!(config.values["cidr"], serde_json::json!("10.0.0.0/16"));
        assert_eq!(config.values["subnets"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_empty_parameters_block() {
        let config = StackConfig::from_yaml("name: web\nparameters:\n").unwrap();
        assert!(config.parameters.is_empty());
    }

    #[test]
    fn test_empty_values_block() {
        let config = StackConfig::from_yaml("name: web\nvalues:\n").unwrap();
        assert!(config.values.is_empty());
    }

    #[test]
    fn test_null_parameter_is_empty_string() {
        let config = StackConfig::from_yaml("name: web\nparameters:\n  KeyName:\n").unwrap();
        assert_eq!(config.parameters["KeyName"], "");
    }

    #[test]
    fn test_nested_parameter_rejected() {
        let err = StackConfig::from_yaml("name: web\nparameters:\n  Tags:\n    - a\n").unwrap_err();
        assert!(err.to_string().contains("Tags"));
    }

    #[test]
    fn test_missing_name_rejected() {
        assert!(StackConfig::from_yaml("values: {}\n").is_err());
    }

    #[test]
    fn test_stack_parameters_sorted() {
        let config =
            StackConfig::from_yaml("name: web\nparameters:\n  Zeta: z\n  Alpha: a\n").unwrap();
        let params = config.stack_parameters();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0], StackParameter::new("Alpha", "a"));
        assert_eq!(params[1], StackParameter::new("Zeta", "z"));
        assert!(params.iter().all(|p| !p.use_previous_value));
    }
}
