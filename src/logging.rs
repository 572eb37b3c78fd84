use anyhow::{Context, Result};
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Installs the global logger. Diagnostics go to `log_path` when given
/// (truncated first), otherwise to stderr. `RUST_LOG` overrides the level.
pub fn init_logging(log_path: Option<&Path>, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();

    if let Some(path) = log_path {
        let file = File::create(path)
            .context(format!("Failed to create log file: {:?}", path))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    } else {
        builder.target(Target::Stderr);
    }

    builder.try_init().context("Failed to initialize logger")
}
