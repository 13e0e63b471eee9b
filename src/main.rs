use std::fs;

use anyhow::{Context, Result};

use gcode2vtk::config::Config;
use gcode2vtk::diagnostics::{ScanReport, Severity};
use gcode2vtk::path::trace_path_with_report;
use gcode2vtk::writer;

fn main() -> Result<()> {
    // Parse configuration from the command line
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    log::info!("Target gcode file: {}", config.input.display());
    log::info!("Target vtk file: {}", config.output.display());
    log::info!("Scaling: {}", config.scale);

    let content = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read gcode file {}", config.input.display()))?;

    let mut report = ScanReport::new();
    let toolpath = trace_path_with_report(&content, &mut report);
    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            Severity::Warning => log::warn!("line {}: {}", diagnostic.line, diagnostic.message),
            Severity::Info => log::info!("line {}: {}", diagnostic.line, diagnostic.message),
        }
    }
    log::info!(
        "Reconstructed {} points, {} segments",
        toolpath.points.len(),
        toolpath.connectivity.len()
    );

    writer::write_vtk_file(&config.output, &toolpath, config.scale)
        .with_context(|| format!("failed to write vtk file {}", config.output.display()))?;

    if let Some(txt) = &config.txt {
        writer::write_txt_file(txt, &toolpath)
            .with_context(|| format!("failed to write txt dump {}", txt.display()))?;
        log::info!("Wrote debug dump to {}", txt.display());
    }

    Ok(())
}
