use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ghostkit_core::build::{BuildEvent, BuildReport, SdkBuilder};
use ghostkit_core::config::{BuildConfig, ClientSourceKind, GhostkitConfig};

use crate::output;
use crate::ClientChoice;

/// CLI flags that override `ghostkit.config.json`.
#[derive(Debug, Default)]
pub struct Overrides {
    pub templates_dir: Option<PathBuf>,
    pub client: Option<ClientChoice>,
    pub client_file: Option<PathBuf>,
}

impl Overrides {
    fn apply(self, config: &mut GhostkitConfig) {
        if let Some(dir) = self.templates_dir {
            config.templates_dir = Some(dir);
        }
        if let Some(file) = self.client_file {
            config.client.file = Some(file);
            config.client.source = ClientSourceKind::Artifact;
        }
        if let Some(client) = self.client {
            config.client.source = client.kind();
        }
    }
}

/// Totals for a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub built: usize,
    pub failed: usize,
}

impl Summary {
    fn from_reports(reports: &[BuildReport]) -> Self {
        let built = reports.iter().filter(|r| r.result.is_ok()).count();
        Self {
            built,
            failed: reports.len() - built,
        }
    }
}

/// Build a ghost SDK for every spec, in order.
///
/// Failures are reported and the batch moves on to the next file; only a
/// broken configuration aborts the run.
pub async fn run(config_path: &Path, specs: &[PathBuf], overrides: Overrides) -> Result<Summary> {
    let mut config = GhostkitConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    overrides.apply(&mut config);

    let build_config = BuildConfig::resolve(&config)?;
    let builder = SdkBuilder::new(build_config);

    let reports = builder
        .build_all(specs, |event| match event {
            BuildEvent::Started(spec) => output::print_building(spec),
            BuildEvent::Finished(report) => match &report.result {
                Ok(out) => output::print_built(out),
                Err(e) => output::print_failed(e),
            },
        })
        .await;
    let summary = Summary::from_reports(&reports);
    tracing::info!(built = summary.built, failed = summary.failed, "batch finished");

    if specs.len() > 1 {
        output::print_key_value("Built", &summary.built.to_string());
        output::print_key_value("Failed", &summary.failed.to_string());
    }

    Ok(summary)
}
