//! Project layout and the stack pipeline
//!
//! ```text
//! <root>/
//!   stacks/     <cascade>.yml   stack config (name, parameters, values)
//!   templates/  <cascade>.yml   Tera + YAML template
//!   output/     <cascade>.json  generated template
//! ```

use crate::error::{CoreError, Result};
use crate::loader::{LoadedFile, load_first_existing, load_stack_config};
use crate::model::StackConfig;
use crate::output::write_document;
use crate::resolver::{CONFIG_EXTENSION, NameCascade, OUTPUT_EXTENSION};
use crate::settings::Settings;
use crate::template::TemplateRenderer;
use cfn_cloud::{StackParameter, StackRequest};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Directory layout rooted at the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the current working directory
    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().map_err(|e| CoreError::io(".", e))?;
        Ok(Self::new(root))
    }

    pub fn stacks_dir(&self) -> PathBuf {
        self.root.join("stacks")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("output")
    }
}

/// A stack with its config loaded
///
/// Built once per run by [`Stack::load`]; the config never changes after that.
#[derive(Debug, Clone)]
pub struct Stack {
    layout: ProjectLayout,
    settings: Settings,
    cascade: NameCascade,
    config_path: PathBuf,
    config: StackConfig,
}

impl Stack {
    /// Resolve and load the stack config for `base`.
    #[instrument(skip(layout, settings), fields(environment = %settings.environment, region = %settings.region))]
    pub fn load(layout: ProjectLayout, base: &str, settings: Settings) -> Result<Self> {
        let cascade = NameCascade::new(base, &settings.environment, &settings.region);
        let (config_path, config) = load_stack_config(&layout, &cascade)?;

        Ok(Self {
            layout,
            settings,
            cascade,
            config_path,
            config,
        })
    }

    /// Path of the stack config that won the cascade
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cloud-side stack name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn parameters(&self) -> Vec<StackParameter> {
        self.config.stack_parameters()
    }

    /// Render the template and write it to `output/`.
    ///
    /// The template is the first `templates/` cascade match; the output is
    /// always written under the most specific name.
    #[instrument(skip(self), fields(stack = %self.cascade.base))]
    pub fn generate(&self) -> Result<PathBuf> {
        let templates = self.cascade.candidates(CONFIG_EXTENSION);
        let template = load_first_existing(&self.layout.templates_dir(), &templates)?;
        debug!(template = %template.path.display(), "Rendering template");

        let document = TemplateRenderer::with_values(&self.config.values)
            .render_document(&template.path)?;

        let file_name = self.cascade.most_specific(OUTPUT_EXTENSION);
        let path = write_document(
            &self.layout.output_dir(),
            &file_name,
            &document,
            self.settings.pretty_output(),
        )?;

        info!(output = %path.display(), "Template generated");
        Ok(path)
    }

    /// Read the generated template back from `output/`.
    pub fn load_generated(&self) -> Result<LoadedFile> {
        let candidates = self.cascade.candidates(OUTPUT_EXTENSION);
        load_first_existing(&self.layout.output_dir(), &candidates)
    }

    /// Generate, read back, and build a create/update request.
    pub fn prepare_request(&self) -> Result<StackRequest> {
        self.generate()?;
        let generated = self.load_generated()?;

        Ok(StackRequest::new(
            self.name(),
            generated.content,
            self.parameters(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfn_cloud::Capability;
    use std::fs;

    struct Fixture {
        _dir: tempfile::TempDir,
        layout: ProjectLayout,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let layout = ProjectLayout::new(dir.path());
            fs::create_dir_all(layout.stacks_dir()).unwrap();
            fs::create_dir_all(layout.templates_dir()).unwrap();
            Self { _dir: dir, layout }
        }

        fn stack(&self, name: &str, content: &str) -> &Self {
            fs::write(self.layout.stacks_dir().join(name), content).unwrap();
            self
        }

        fn template(&self, name: &str, content: &str) -> &Self {
            fs::write(self.layout.templates_dir().join(name), content).unwrap();
            self
        }
    }

    fn settings(environment: &str, region: &str) -> Settings {
        Settings {
            environment: environment.to_string(),
            region: region.to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_generate_writes_most_specific_name() -> Result<()> {
        let fx = Fixture::new();
        fx.stack("web.yml", "name: web\nvalues:\n  size: 2\n")
            .template("web.yml", "Size: {{ size }}\nName: web\n");

        let stack = Stack::load(fx.layout.clone(), "web", settings("prod", "eu-west-1"))?;
        let path = stack.generate()?;

        assert_eq!(path, fx.layout.output_dir().join("web.prod.eu-west-1.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"Name":"web","Size":2}"#);
        Ok(())
    }

    #[test]
    fn test_generate_uses_most_specific_template() -> Result<()> {
        let fx = Fixture::new();
        fx.stack("web.yml", "name: web\n")
            .template("web.prod.yml", "Tier: prod\n")
            .template("web.yml", "Tier: base\n");

        let stack = Stack::load(fx.layout.clone(), "web", settings("prod", ""))?;
        let generated = {
            stack.generate()?;
            stack.load_generated()?
        };

        assert!(generated.path.ends_with("output/web.prod.json"));
        assert_eq!(generated.content, r#"{"Tier":"prod"}"#);
        Ok(())
    }

    #[test]
    fn test_generate_pretty_when_debug() -> Result<()> {
        let fx = Fixture::new();
        fx.stack("web.yml", "name: web\n").template("web.yml", "B: 1\nA: 2\n");

        let mut s = settings("", "");
        s.debug = true;
        let stack = Stack::load(fx.layout.clone(), "web", s)?;
        let path = stack.generate()?;

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "{\n    \"A\": 2,\n    \"B\": 1\n}"
        );
        Ok(())
    }

    #[test]
    fn test_generate_twice_is_byte_identical() -> Result<()> {
        let fx = Fixture::new();
        fx.stack("web.yml", "name: web\nvalues:\n  zones: [a, b]\n").template(
            "web.yml",
            "Resources:\n  Z: {Type: x}\n  A: {Type: y}\nZones: {{ zones | json_encode() }}\n",
        );

        let stack = Stack::load(fx.layout.clone(), "web", settings("", ""))?;
        let first = fs::read(stack.generate()?).unwrap();
        let second = fs::read(stack.generate()?).unwrap();

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let fx = Fixture::new();
        fx.stack("web.yml", "name: web\n");

        let stack = Stack::load(fx.layout.clone(), "web", settings("", "")).unwrap();
        assert!(matches!(stack.generate(), Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn test_missing_stack_config_is_not_found() {
        let fx = Fixture::new();
        let result = Stack::load(fx.layout.clone(), "web", settings("prod", ""));

        match result {
            Err(CoreError::NotFound { candidates, .. }) => {
                assert_eq!(candidates, vec!["web.prod.yml", "web.yml"]);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_request() -> Result<()> {
        let fx = Fixture::new();
        fx.stack(
            "web.dev.yml",
            "name: web-dev\nparameters:\n  Size: 1\n  Env: dev\n",
        )
        .template("web.yml", "Resources: {}\n");

        let stack = Stack::load(fx.layout.clone(), "web", settings("dev", ""))?;
        let request = stack.prepare_request()?;

        assert!(stack.config_path().ends_with("stacks/web.dev.yml"));
        assert_eq!(request.name, "web-dev");
        assert_eq!(request.template_body, r#"{"Resources":{}}"#);
        assert_eq!(
            request.parameters,
            vec![StackParameter::new("Env", "dev"), StackParameter::new("Size", "1")]
        );
        assert_eq!(request.capabilities, vec![Capability::Iam]);
        Ok(())
    }
}
