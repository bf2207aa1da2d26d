//! Sources for the typed client body the SDK wraps.
//!
//! The typed client is produced by the algokit client generator. It can be
//! read from a file generated beforehand ([`ArtifactClient`]), produced on the
//! fly by running the generator ([`AlgokitClient`]), or either of the two
//! depending on whether the artifact exists ([`AutoClient`]).

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::arc56::ContractSpec;
use crate::build::spec_dir;
use crate::config::{ClientConfig, ClientSourceKind};
use crate::error::{GhostkitError, Result};

/// Produces the typed client source for a contract.
#[async_trait]
pub trait ClientGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn generate(&self, spec_path: &Path, spec: &ContractSpec) -> Result<String>;
}

/// Default location of a pre-generated client: `<spec dir>/<Name>Client.ts`.
pub fn default_artifact_path(spec_path: &Path, contract_name: &str) -> PathBuf {
    spec_dir(spec_path).join(format!("{contract_name}Client.ts"))
}

/// Reads an existing client file.
#[derive(Debug, Clone, Default)]
pub struct ArtifactClient {
    /// Explicit file; falls back to [`default_artifact_path`].
    pub path: Option<PathBuf>,
}

#[async_trait]
impl ClientGenerator for ArtifactClient {
    fn name(&self) -> &'static str {
        "artifact"
    }

    async fn generate(&self, spec_path: &Path, spec: &ContractSpec) -> Result<String> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| default_artifact_path(spec_path, &spec.name));
        tracing::debug!(path = %path.display(), "reading typed client");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| GhostkitError::ClientNotFound { path, source: e })
    }
}

/// Runs the algokit client generator: `<command...> generate -a <spec> -o <out>`.
#[derive(Debug, Clone)]
pub struct AlgokitClient {
    command: Vec<String>,
}

impl AlgokitClient {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn program(&self) -> Result<&str> {
        self.command
            .first()
            .map(String::as_str)
            .ok_or_else(|| GhostkitError::ClientGeneration("empty client generator command".into()))
    }
}

#[async_trait]
impl ClientGenerator for AlgokitClient {
    fn name(&self) -> &'static str {
        "algokit"
    }

    async fn generate(&self, spec_path: &Path, spec: &ContractSpec) -> Result<String> {
        let program = self.program()?;
        which::which(program).map_err(|_| GhostkitError::MissingTool {
            name: program.to_string(),
            install: "https://nodejs.org (provides npx)".into(),
        })?;

        let out_dir = tempfile::tempdir()?;
        let out_path = out_dir.path().join(format!("{}Client.ts", spec.name));

        tracing::info!(program, spec = %spec_path.display(), "running client generator");
        let output = tokio::process::Command::new(program)
            .args(&self.command[1..])
            .arg("generate")
            .arg("-a")
            .arg(spec_path)
            .arg("-o")
            .arg(&out_path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(GhostkitError::ClientGeneration(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        tokio::fs::read_to_string(&out_path)
            .await
            .map_err(|e| GhostkitError::ClientNotFound {
                path: out_path,
                source: e,
            })
    }
}

/// Uses the artifact next to the spec when present, the generator otherwise.
#[derive(Debug, Clone)]
pub struct AutoClient {
    generator: AlgokitClient,
}

impl AutoClient {
    pub fn new(generator: AlgokitClient) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl ClientGenerator for AutoClient {
    fn name(&self) -> &'static str {
        "auto"
    }

    async fn generate(&self, spec_path: &Path, spec: &ContractSpec) -> Result<String> {
        let artifact = default_artifact_path(spec_path, &spec.name);
        if artifact.is_file() {
            return ArtifactClient { path: Some(artifact) }
                .generate(spec_path, spec)
                .await;
        }
        tracing::warn!(
            missing = %artifact.display(),
            "no pre-generated client, falling back to generator"
        );
        self.generator.generate(spec_path, spec).await
    }
}

/// Build the client source selected by `config`.
pub fn from_config(config: &ClientConfig) -> Box<dyn ClientGenerator> {
    let algokit = AlgokitClient::new(config.generator.clone());
    match config.source {
        ClientSourceKind::Artifact => Box::new(ArtifactClient {
            path: config.file.clone(),
        }),
        ClientSourceKind::Algokit => Box::new(algokit),
        ClientSourceKind::Auto if config.file.is_some() => Box::new(ArtifactClient {
            path: config.file.clone(),
        }),
        ClientSourceKind::Auto => Box::new(AutoClient::new(algokit)),
    }
}
