//! Error types for the domain layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::access::{Action, Role};

/// Errors raised while editing a template or snippet draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// A field index beyond the extracted field list.
    #[error("field {index} does not exist (draft has {len} fields)")]
    FieldOutOfRange { index: usize, len: usize },

    /// Field edits need a template-based draft.
    #[error("draft is free-form and has no template fields")]
    NotTemplated,

    /// Free-form content edits are not allowed once a template is selected.
    #[error("draft content is rendered from template '{0}'")]
    TemplateBound(String),

    /// The template passed does not match the one the snippet was built from.
    #[error("snippet was built from template '{expected}', got '{found}'")]
    TemplateMismatch { expected: String, found: String },

    /// A required payload field is empty.
    #[error("please provide a {0}")]
    Missing(&'static str),
}

/// Errors raised by the access guard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The role may not perform the action.
    #[error("403 - forbidden: role '{role}' may not {action}")]
    Forbidden { role: Role, action: Action },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`Config`](crate::Config).
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment override could not be parsed.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidEnv {
        name: String,
        value: String,
        reason: String,
    },

    /// A configured value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
