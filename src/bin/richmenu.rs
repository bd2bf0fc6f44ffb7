use std::path::Path;

use anyhow::Context as _;
use clap::Parser;

use richmenu::{FontLocator, MenuConfig, RunSummary};

/// Generate the rich-menu PNG assets in the current directory.
///
/// No flags: colors, layout and text are fixed. Exits 1 when no
/// CJK-capable font is installed (nothing is written in that case).
#[derive(Parser, Debug)]
#[command(name = "richmenu", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let out_dir = std::env::current_dir().with_context(|| "resolve current directory")?;
    let summary = run(&FontLocator::default(), &MenuConfig::default(), &out_dir)?;

    for asset in &summary.produced {
        eprintln!(
            "wrote {} ({:.1} KB)",
            asset.path.display(),
            asset.bytes as f64 / 1024.0
        );
    }
    for (scheme, err) in &summary.failed {
        eprintln!("skipped {scheme}: {err}");
    }
    eprintln!(
        "{} of {} schemes produced",
        summary.produced.len(),
        summary.attempted()
    );
    Ok(())
}

/// The whole run minus argv/cwd handling, so the failure paths are unit
/// testable. An `Err` here is what turns into the process's exit code 1.
fn run(locator: &FontLocator, config: &MenuConfig, out_dir: &Path) -> anyhow::Result<RunSummary> {
    config.validate()?;

    // Font resolution happens before any scheme so a missing font aborts
    // the whole run with nothing written.
    let fonts = locator.load()?;
    eprintln!(
        "using {} ({}px) and {} ({}px)",
        fonts.primary_path.display(),
        config.primary_size_px,
        fonts.secondary_path.display(),
        config.secondary_size_px,
    );

    let summary = richmenu::generate_menus(config, &fonts, out_dir)?;
    if summary.produced.is_empty() {
        anyhow::bail!("no images produced");
    }
    Ok(summary)
}
