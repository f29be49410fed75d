//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from resolving, loading, rendering and writing stack files
#[derive(Error, Debug)]
pub enum CoreError {
    /// No cascade candidate exists as a regular file in `directory`.
    #[error("no usable file found in {directory}\ncandidates: {}", candidates.join(", "))]
    NotFound {
        directory: PathBuf,
        candidates: Vec<String>,
    },

    /// Reading or writing `path` failed.
    #[error("IO error: {path}\nreason: {message}")]
    Io { path: PathBuf, message: String },

    /// The stack config is not valid YAML or misses `name`.
    #[error("invalid stack config: {path}\nreason: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Tera could not expand a template file.
    #[error("template error: {file}\nreason: {message}")]
    TemplateError { file: PathBuf, message: String },

    /// Tera could not expand an in-memory template.
    #[error("template render error: {0}")]
    TemplateRender(String),

    /// The expanded template file is not valid YAML.
    #[error("rendered template is not a valid document: {file}\nreason: {message}")]
    DocumentParse { file: PathBuf, message: String },

    /// Expanded template text is not valid YAML.
    #[error("rendered template is not a valid document: {0}")]
    InvalidDocument(String),

    /// Serializing the output document failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
