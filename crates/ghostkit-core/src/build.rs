//! Build driver: one ARC-56 spec in, one SDK file out.
//!
//! A build either writes the complete document or writes nothing. The output
//! lands next to the spec as `<Name>SDK.ts` (see [`OutputConfig`]) and is
//! replaced on every run.
//!
//! [`OutputConfig`]: crate::config::OutputConfig

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::arc56::ContractSpec;
use crate::assemble::{assemble, ensure_resolved};
use crate::client::{self, ClientGenerator};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::templates::renderer::MethodRenderer;

/// Directory containing `spec_path`; empty for a bare file name.
pub fn spec_dir(spec_path: &Path) -> &Path {
    spec_path.parent().unwrap_or_else(|| Path::new(""))
}

/// Outcome of building one spec file.
#[derive(Debug)]
pub struct BuildReport {
    pub spec_path: PathBuf,
    pub result: Result<PathBuf>,
}

/// Progress of a batch, in order.
#[derive(Debug)]
pub enum BuildEvent<'a> {
    Started(&'a Path),
    Finished(&'a BuildReport),
}

/// Builds SDKs with a fixed configuration and client source.
pub struct SdkBuilder {
    config: BuildConfig,
    client: Box<dyn ClientGenerator>,
}

impl SdkBuilder {
    /// Builder using the client source named in `config`.
    pub fn new(config: BuildConfig) -> Self {
        let client = client::from_config(&config.client);
        Self::with_client(config, client)
    }

    pub fn with_client(config: BuildConfig, client: Box<dyn ClientGenerator>) -> Self {
        Self { config, client }
    }

    /// Path the SDK for `spec` is written to.
    pub fn output_path(&self, spec_path: &Path, spec: &ContractSpec) -> PathBuf {
        spec_dir(spec_path).join(self.config.output.file_name(&spec.name))
    }

    /// Build the SDK for one spec file and return the written path.
    pub async fn build(&self, spec_path: &Path) -> Result<PathBuf> {
        let spec = ContractSpec::load(spec_path)?;

        // Validate before paying for client generation.
        let fragments = MethodRenderer::new(&self.config.templates.method).render(&spec.methods)?;

        tracing::debug!(client = self.client.name(), "obtaining typed client");
        let client = self.client.generate(spec_path, &spec).await?;

        let document = assemble(&client, &spec.name, &self.config.templates.index, &fragments);
        ensure_resolved(&document)?;

        let out = self.output_path(spec_path, &spec);
        write_atomic(&out, &document)?;
        tracing::info!(
            contract = %spec.name,
            methods = fragments.len(),
            path = %out.display(),
            "wrote SDK"
        );
        Ok(out)
    }

    /// Build every spec in order. A failure only affects its own file.
    ///
    /// `on_event` sees each file before and after its build.
    pub async fn build_all<F>(&self, spec_paths: &[PathBuf], mut on_event: F) -> Vec<BuildReport>
    where
        F: FnMut(BuildEvent<'_>),
    {
        let mut reports = Vec::with_capacity(spec_paths.len());
        for spec_path in spec_paths {
            on_event(BuildEvent::Started(spec_path.as_path()));
            let result = self.build(spec_path).await;
            if let Err(e) = &result {
                tracing::debug!(spec = %spec_path.display(), error = ?e, "build failed");
            }
            let report = BuildReport {
                spec_path: spec_path.clone(),
                result,
            };
            on_event(BuildEvent::Finished(&report));
            reports.push(report);
        }
        reports
    }
}

/// Write through a temp file in the target directory, then rename over `path`.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match spec_dir(path) {
        d if d.as_os_str().is_empty() => Path::new("."),
        d => d,
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
