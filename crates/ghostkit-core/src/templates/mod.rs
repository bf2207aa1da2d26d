//! Template system for ghost SDK generation.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, or read from a user-supplied directory, then filled in by plain
//! placeholder substitution in [`renderer`]. Substitution is global: a template may
//! reference a placeholder any number of times.
//!
//! ## Placeholders
//!
//! - `{{ARC56_NAME}}` — contract name, main template
//! - `{{METHODS}}` — insertion point for the rendered methods, main template
//! - `{{METHOD_NAME}}` — method name, method template
//! - `{{METHOD_SIGNATURE}}` — ARC-4 method signature, method template
//!
//! A templates directory must contain both `index.ts.template` and `method.ts.template`.

pub mod embedded;
pub mod renderer;

use std::path::Path;

use crate::error::{GhostkitError, Result};

/// Placeholder tokens recognised in templates.
pub mod placeholder {
    pub const ARC56_NAME: &str = "{{ARC56_NAME}}";
    pub const METHODS: &str = "{{METHODS}}";
    pub const METHOD_NAME: &str = "{{METHOD_NAME}}";
    pub const METHOD_SIGNATURE: &str = "{{METHOD_SIGNATURE}}";

    /// Every token; none may survive into a generated document.
    pub const ALL: [&str; 4] = [ARC56_NAME, METHODS, METHOD_NAME, METHOD_SIGNATURE];
}

pub const INDEX_TEMPLATE_FILE: &str = "index.ts.template";
pub const METHOD_TEMPLATE_FILE: &str = "method.ts.template";

/// The pair of templates one build renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Main SDK template.
    pub index: String,
    /// Per-method template.
    pub method: String,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            index: embedded::SDK_INDEX.to_string(),
            method: embedded::SDK_METHOD.to_string(),
        }
    }

    /// Read both templates from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|e| GhostkitError::TemplateNotFound { path, source: e })
        };
        Ok(Self {
            index: read(INDEX_TEMPLATE_FILE)?,
            method: read(METHOD_TEMPLATE_FILE)?,
        })
    }

    /// Read from `dir` when given, else use the embedded templates.
    pub fn resolve(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "loading templates");
                Self::load(dir)
            }
            None => Ok(Self::embedded()),
        }
    }
}
