//! Cascade loader
//!
//! Picks the first candidate that exists in a directory. When several
//! candidates exist at once the earliest (most specific) one wins and the
//! rest are ignored without a warning.

use crate::error::{CoreError, Result};
use crate::model::StackConfig;
use crate::project::ProjectLayout;
use crate::resolver::{CONFIG_EXTENSION, NameCascade};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A file located by the cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Return the first candidate in `directory` that is a regular file.
#[instrument(skip(directory, candidates), fields(directory = %directory.display()))]
pub fn load_first_existing(directory: &Path, candidates: &[String]) -> Result<LoadedFile> {
    for name in candidates {
        let path = directory.join(name);
        debug!(checking = %path.display(), "Looking for cascade candidate");

        if !path.is_file() {
            continue;
        }

        let content = std::fs::read_to_string(&path).map_err(|e| CoreError::io(&path, e))?;
        info!(file = %path.display(), "Resolved cascade candidate");
        return Ok(LoadedFile { path, content });
    }

    Err(CoreError::NotFound {
        directory: directory.to_path_buf(),
        candidates: candidates.to_vec(),
    })
}

/// Load the stack config for `cascade` from `stacks/`.
#[instrument(skip(layout, cascade), fields(stack = %cascade.base))]
pub fn load_stack_config(
    layout: &ProjectLayout,
    cascade: &NameCascade,
) -> Result<(PathBuf, StackConfig)> {
    let candidates = cascade.candidates(CONFIG_EXTENSION);
    let file = load_first_existing(&layout.stacks_dir(), &candidates)?;
    let config = StackConfig::from_yaml(&file.content).map_err(|e| CoreError::ConfigParse {
        path: file.path.clone(),
        message: e.to_string(),
    })?;

    info!(name = %config.name, parameters = config.parameters.len(), "Stack config loaded");
    Ok((file.path, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_candidates;
    use std::fs;

    #[test]
    fn test_most_specific_existing_wins() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        fs::write(dir.join("a.dev.yml"), "dev").unwrap();
        fs::write(dir.join("a.yml"), "base").unwrap();

        let candidates = resolve_candidates("a", "dev", "us-east-1", "yml");
        let file = load_first_existing(dir, &candidates)?;

        assert!(file.path.ends_with("a.dev.yml"));
        assert_eq!(file.content, "dev");

        Ok(())
    }

    #[test]
    fn test_fallback_used_when_nothing_specific() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("a.yml"), "base").unwrap();

        let candidates = resolve_candidates("a", "dev", "us-east-1", "yml");
        let file = load_first_existing(temp_dir.path(), &candidates)?;

        assert!(file.path.ends_with("a.yml"));
        Ok(())
    }

    #[test]
    fn test_region_beats_fallback() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("a.us-east-1.yml"), "region").unwrap();
        fs::write(temp_dir.path().join("a.yml"), "base").unwrap();

        let candidates = resolve_candidates("a", "dev", "us-east-1", "yml");
        let file = load_first_existing(temp_dir.path(), &candidates)?;

        assert_eq!(file.content, "region");
        Ok(())
    }

    #[test]
    fn test_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let candidates = resolve_candidates("a", "dev", "", "yml");

        match load_first_existing(temp_dir.path(), &candidates) {
            Err(CoreError::NotFound {
                directory,
                candidates,
            }) => {
                assert_eq!(directory, temp_dir.path());
                assert_eq!(candidates, vec!["a.dev.yml", "a.yml"]);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_named_like_candidate_is_skipped() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("a.dev.yml")).unwrap();
        fs::write(temp_dir.path().join("a.yml"), "base").unwrap();

        let candidates = resolve_candidates("a", "dev", "", "yml");
        let file = load_first_existing(temp_dir.path(), &candidates)?;

        assert!(file.path.ends_with("a.yml"));
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("stacks");

        let result = load_first_existing(&missing, &["a.yml".to_string()]);
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn test_load_stack_config() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        fs::create_dir_all(layout.stacks_dir()).unwrap();
        fs::write(
            layout.stacks_dir().join("web.prod.yml"),
            "name: web-prod\nparameters:\n  InstanceType: t3.small\n",
        )
        .unwrap();
        fs::write(layout.stacks_dir().join("web.yml"), "name: web\n").unwrap();

        let cascade = NameCascade::new("web", "prod", "");
        let (path, config) = load_stack_config(&layout, &cascade)?;

        assert!(path.ends_with("stacks/web.prod.yml"));
        assert_eq!(config.name, "web-prod");
        assert_eq!(config.parameters["InstanceType"], "t3.small");

        Ok(())
    }

    #[test]
    fn test_load_stack_config_invalid_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        fs::create_dir_all(layout.stacks_dir()).unwrap();
        fs::write(layout.stacks_dir().join("web.yml"), "parameters: {}\n").unwrap();

        let result = load_stack_config(&layout, &NameCascade::new("web", "", ""));
        match result {
            Err(CoreError::ConfigParse { path, message }) => {
                assert!(path.ends_with("web.yml"));
                assert!(message.contains("name"));
            }
            other => panic!("Expected ConfigParse, got {:?}", other),
        }
    }
}
