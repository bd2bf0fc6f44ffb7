use std::path::{Path, PathBuf};

use crate::{
    compose::MenuCompositor,
    encode,
    error::{MenuError, MenuResult},
    fonts::FontSet,
    model::MenuConfig,
};

/// One successfully written asset.
#[derive(Clone, Debug)]
pub struct ProducedAsset {
    pub scheme: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome of a full run: what was written and what was skipped.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub produced: Vec<ProducedAsset>,
    pub failed: Vec<(String, MenuError)>,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.produced.len() + self.failed.len()
    }
}

/// Run the whole pipeline: one PNG per scheme, in config order.
///
/// Per-scheme render or write failures are recorded and skipped; the loop
/// continues with the next scheme. The caller is responsible for having a
/// loaded [`FontSet`] already, so a missing font aborts before this runs.
#[tracing::instrument(skip(config, fonts), fields(out_dir = %out_dir.display()))]
pub fn generate_menus(
    config: &MenuConfig,
    fonts: &FontSet,
    out_dir: &Path,
) -> MenuResult<RunSummary> {
    config.validate()?;

    // Registering the fonts is the last fatal step; everything after is
    // isolated per scheme.
    let mut compositor = MenuCompositor::new(config, fonts)?;
    let mut summary = RunSummary::default();

    for scheme in &config.schemes {
        let path = out_dir.join(config.output_filename(scheme));
        let outcome = compositor
            .compose(scheme)
            .and_then(|image| encode::write_png(&path, &image));
        match outcome {
            Ok(bytes) => summary.produced.push(ProducedAsset {
                scheme: scheme.name.clone(),
                path,
                bytes,
            }),
            Err(err) => {
                tracing::warn!(scheme = %scheme.name, error = %err, "scheme failed, skipping");
                // Drop any partially written file for this scheme.
                let _ = std::fs::remove_file(&path);
                summary.failed.push((scheme.name.clone(), err));
            }
        }
    }

    Ok(summary)
}
