//! Unified error types for the ghostkit toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while building a ghost SDK.
#[derive(Error, Debug)]
pub enum GhostkitError {
    // --- Method validation ---

    /// The method cannot be invoked through a `NoOp` create call.
    #[error(
        "Method {0} does not support creation calls. Decorate it with `@abimethod({{ readonly: true, onCreate: 'require' }})`"
    )]
    NonCreatableMethod(String),

    /// The method is not marked read-only.
    #[error(
        "Method {0} is not readonly. Decorate it with `@abimethod({{ readonly: true, onCreate: 'require' }})`"
    )]
    NonReadonlyMethod(String),

    /// An argument or return type is not a valid ARC-4 type.
    #[error("method {method} has invalid ABI type '{type_str}': {reason}")]
    InvalidAbiType {
        method: String,
        type_str: String,
        reason: String,
    },

    // --- Contract spec ---

    /// The ARC-56 spec file could not be read.
    #[error("contract spec not found at {path}")]
    SpecNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ARC-56 spec file is not valid JSON or misses required fields.
    #[error("failed to parse contract spec at {path}")]
    SpecParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Configuration ---

    /// The configuration file (`ghostkit.config.json`) could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// A template file in the configured templates directory could not be read.
    #[error("template not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A placeholder token survived assembly.
    #[error("unresolved placeholder {0} in generated document")]
    UnresolvedPlaceholder(&'static str),

    // --- Client generation ---

    /// The pre-generated typed client file could not be read.
    #[error("typed client not found at {path}")]
    ClientNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required external tool (e.g., `npx`) is not installed.
    #[error("required tool '{name}' not found; install: {install}")]
    MissingTool { name: String, install: String },

    /// The external client generator failed.
    #[error("client generation failed: {0}")]
    ClientGeneration(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, GhostkitError>`.
pub type Result<T> = std::result::Result<T, GhostkitError>;
