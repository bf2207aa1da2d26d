//! Configuration for ghostkit builds.
//!
//! Settings come from an optional `ghostkit.config.json`, are overridden by CLI
//! flags, and are then resolved once into a [`BuildConfig`] that every build
//! receives explicitly.
//!
//! ```json
//! {
//!   "templatesDir": "sdk-templates",
//!   "client": { "source": "auto", "generator": ["npx", "--yes", "@algorandfoundation/algokit-client-generator"] },
//!   "output": { "suffix": "SDK", "extension": "ts" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GhostkitError, Result};
use crate::templates::Templates;

pub const CONFIG_FILE: &str = "ghostkit.config.json";

/// Contents of `ghostkit.config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostkitConfig {
    /// Directory holding `index.ts.template` and `method.ts.template`.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the typed client body comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientSourceKind {
    /// Pre-generated file if present, generator otherwise.
    #[default]
    Auto,
    Artifact,
    Algokit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default)]
    pub source: ClientSourceKind,
    /// Explicit pre-generated client file.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Program and leading arguments of the client generator.
    #[serde(default = "default_generator")]
    pub generator: Vec<String>,
}

fn default_generator() -> Vec<String> {
    ["npx", "--yes", "@algorandfoundation/algokit-client-generator"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            source: ClientSourceKind::Auto,
            file: None,
            generator: default_generator(),
        }
    }
}

/// Naming of the generated file: `<Name><suffix>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_suffix() -> String {
    "SDK".into()
}

fn default_extension() -> String {
    "ts".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            extension: default_extension(),
        }
    }
}

impl OutputConfig {
    pub fn file_name(&self, contract_name: &str) -> String {
        format!("{contract_name}{}.{}", self.suffix, self.extension)
    }
}

impl GhostkitConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GhostkitError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self = serde_json::from_str(&contents).map_err(|e| GhostkitError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let (Some(dir), Some(base)) = (&config.templates_dir, path.parent()) {
            if dir.is_relative() {
                config.templates_dir = Some(base.join(dir));
            }
        }
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for a batch of builds.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub templates: Templates,
    pub client: ClientConfig,
    pub output: OutputConfig,
}

impl BuildConfig {
    /// Resolve templates and carry the remaining settings over.
    pub fn resolve(config: &GhostkitConfig) -> Result<Self> {
        Ok(Self {
            templates: Templates::resolve(config.templates_dir.as_deref())?,
            client: config.client.clone(),
            output: config.output.clone(),
        })
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            templates: Templates::embedded(),
            client: ClientConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GhostkitConfig::default();
        assert_eq!(config.client.source, ClientSourceKind::Auto);
        assert_eq!(config.client.generator[0], "npx");
        assert_eq!(config.output.file_name("Ghostofavm"), "GhostofavmSDK.ts");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "client": { "source": "artifact" }, "output": { "extension": "mts" } }"#)
            .unwrap();

        let config = GhostkitConfig::load(&path).unwrap();
        assert_eq!(config.client.source, ClientSourceKind::Artifact);
        assert_eq!(config.client.generator, default_generator());
        assert_eq!(config.output.file_name("Foo"), "FooSDK.mts");
    }

    #[test]
    fn test_relative_templates_dir_resolved_against_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "templatesDir": "tpl" }"#).unwrap();

        let config = GhostkitConfig::load(&path).unwrap();
        assert_eq!(config.templates_dir, Some(dir.path().join("tpl")));
    }

    #[test]
    fn test_load_or_default_missing() {
        let config = GhostkitConfig::load_or_default(Path::new("/tmp/nonexistent_ghostkit/cfg.json")).unwrap();
        assert_eq!(config, GhostkitConfig::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GhostkitConfig::load(&path),
            Err(GhostkitError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_build_config_missing_templates_dir() {
        let config = GhostkitConfig {
            templates_dir: Some(PathBuf::from("/tmp/nonexistent_ghostkit/templates")),
            ..Default::default()
        };
        assert!(matches!(
            BuildConfig::resolve(&config),
            Err(GhostkitError::TemplateNotFound { .. })
        ));
    }
}
