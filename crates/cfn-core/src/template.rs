//! Template rendering
//!
//! Templates are YAML files with Tera substitutions. Rendering happens in
//! two passes: Tera expands `{{ ... }}` / `{% ... %}` against the stack's
//! `values`, then the expanded text is parsed as YAML into a JSON tree.
//! Parsing follows YAML 1.2 (`yes`/`no`/`on`/`off` are strings) and applies
//! `<<` merge keys.
//!
//! CloudFormation short-form intrinsic tags are expanded while parsing:
//!
//! | YAML                  | JSON                                  |
//! |-----------------------|---------------------------------------|
//! | `!Ref Bucket`         | `{"Ref": "Bucket"}`                   |
//! | `!Condition IsProd`   | `{"Condition": "IsProd"}`             |
//! | `!GetAtt Bucket.Arn`  | `{"Fn::GetAtt": ["Bucket", "Arn"]}`   |
//! | `!Sub "${AWS::Region}"` | `{"Fn::Sub": "${AWS::Region}"}`     |

use crate::error::{CoreError, Result};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tera::{Context, Tera};
use tracing::debug;

/// Template renderer
pub struct TemplateRenderer {
    tera: Tera,
    context: Context,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
            context: Context::new(),
        }
    }

    /// Renderer with every entry of `values` in its context
    pub fn with_values(values: &BTreeMap<String, Value>) -> Self {
        let mut renderer = Self::new();
        renderer.add_values(values);
        renderer
    }

    pub fn add_values(&mut self, values: &BTreeMap<String, Value>) {
        for (key, value) in values {
            self.context.insert(key, value);
        }
    }

    /// Expand a template string
    pub fn render_str(&mut self, template: &str) -> Result<String> {
        self.tera
            .render_str(template, &self.context)
            .map_err(|e| CoreError::TemplateRender(extract_tera_error_detail(&e)))
    }

    /// Read and expand a template file
    pub fn render_file(&mut self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;

        self.render_str(&content).map_err(|e| match e {
            CoreError::TemplateRender(message) => CoreError::TemplateError {
                file: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Expand a template file and parse the result
    pub fn render_document(&mut self, path: &Path) -> Result<Value> {
        let rendered = self.render_file(path)?;
        debug!(file = %path.display(), rendered_size = rendered.len(), "Template expanded");

        parse_document(&rendered).map_err(|e| match e {
            CoreError::InvalidDocument(message) => CoreError::DocumentParse {
                file: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `source` with `values` and parse it as a document.
pub fn render(source: &str, values: &BTreeMap<String, Value>) -> Result<Value> {
    let rendered = TemplateRenderer::with_values(values).render_str(source)?;
    parse_document(&rendered)
}

/// Parse rendered YAML into a JSON tree.
pub fn parse_document(text: &str) -> Result<Value> {
    let mut yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| CoreError::InvalidDocument(e.to_string()))?;
    // `<<: *anchor` merges; keys already in the mapping win
    yaml.apply_merge()
        .map_err(|e| CoreError::InvalidDocument(e.to_string()))?;
    yaml_to_json(yaml).map_err(CoreError::InvalidDocument)
}

fn yaml_to_json(value: serde_yaml::Value) -> std::result::Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => Value::Number(yaml_number(&n)?),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => {
            let serde_yaml::value::TaggedValue { tag, value } = *tagged;
            let tag = tag.to_string();
            intrinsic(tag.trim_start_matches('!'), yaml_to_json(value)?)
        }
    })
}

/// Expand a short-form intrinsic tag into its long form.
fn intrinsic(name: &str, value: Value) -> Value {
    let (key, value) = match (name, value) {
        ("Ref", value) => ("Ref".to_string(), value),
        ("Condition", value) => ("Condition".to_string(), value),
        // !GetAtt Resource.Attribute
        ("GetAtt", Value::String(s)) => {
            let value = match s.split_once('.') {
                Some((resource, attribute)) => Value::Array(vec![
                    Value::String(resource.to_string()),
                    Value::String(attribute.to_string()),
                ]),
                None => Value::String(s),
            };
            ("Fn::GetAtt".to_string(), value)
        }
        (name, value) => (format!("Fn::{name}"), value),
    };

    let mut map = Map::new();
    map.insert(key, value);
    Value::Object(map)
}

fn mapping_key(key: serde_yaml::Value) -> std::result::Result<String, String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(format!("unsupported mapping key: {other:?}")),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> std::result::Result<Number, String> {
    if let Some(i) = n.as_i64() {
        Ok(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Number::from(u))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .ok_or_else(|| format!("number {n} cannot be represented in JSON"))
    }
}

/// Pull the useful part out of a Tera error chain.
fn extract_tera_error_detail(e: &tera::Error) -> String {
    use std::error::Error;

    let mut details = vec![e.to_string()];
    let mut source = e.source();
    while let Some(err) = source {
        details.push(err.to_string());
        source = err.source();
    }

    let full_error = details.join(" | ");

    // "Variable `xxx` not found in context while rendering ..."
    if let Some(start) = full_error.find("Variable `")
        && let Some(end) = full_error[start..].find("` not found")
    {
        let var_name = &full_error[start + 10..start + end];
        return format!(
            "undefined variable: `{}`\nhint: add it under `values:` in the stack config",
            var_name
        );
    }

    full_error
}
