use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trajkit::{
    init_logging, CircleStackGenerator, CompressionGenerator, Config, CsvExporter,
    SpiralGenerator, SpiralStackGenerator, Trajectory, BUILD_DATE, VERSION,
};

#[derive(Parser)]
#[command(name = "trajkit", version, about = "Generate and export stage trajectories")]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config file if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the exported axis files, overriding the configuration
    #[arg(long)]
    output: Option<PathBuf>,

    /// Trajectory to generate
    #[arg(value_enum)]
    selection: Selection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Selection {
    CircleStack,
    Compression,
    Spiral,
    SpiralStack,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrajectoryKind {
    CircleStack,
    Compression,
    Spiral,
    SpiralStack,
}

impl Selection {
    fn kinds(self) -> &'static [TrajectoryKind] {
        match self {
            Self::CircleStack => &[TrajectoryKind::CircleStack],
            Self::Compression => &[TrajectoryKind::Compression],
            Self::Spiral => &[TrajectoryKind::Spiral],
            Self::SpiralStack => &[TrajectoryKind::SpiralStack],
            Self::All => &[
                TrajectoryKind::CircleStack,
                TrajectoryKind::Compression,
                TrajectoryKind::Spiral,
                TrajectoryKind::SpiralStack,
            ],
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match Config::default_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn generate(config: &Config, kind: TrajectoryKind) -> (Trajectory, &str) {
    let names = &config.export;
    match kind {
        TrajectoryKind::CircleStack => (
            CircleStackGenerator::new(config.circle_stack.clone()).generate(),
            names.circle_stack_name.as_str(),
        ),
        TrajectoryKind::Compression => (
            CompressionGenerator::new(config.compression.clone()).generate(),
            names.compression_name.as_str(),
        ),
        TrajectoryKind::Spiral => (
            SpiralGenerator::new(config.spiral.clone()).generate(),
            names.spiral_name.as_str(),
        ),
        TrajectoryKind::SpiralStack => (
            SpiralStackGenerator::new(config.spiral_stack.clone()).generate(),
            names.spiral_stack_name.as_str(),
        ),
    }
}

fn summary_line(base_name: &str, points: usize) -> String {
    format!("Points Generated: {} ({})", points, base_name)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!("trajkit {} (built {})", VERSION, BUILD_DATE);

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.export.output_directory = output;
    }
    config.validate().context("Invalid configuration")?;

    let exporter: CsvExporter = config.export.exporter().context("Invalid export settings")?;

    for &kind in cli.selection.kinds() {
        let (trajectory, base_name) = generate(&config, kind);
        exporter
            .export(base_name, &trajectory)
            .with_context(|| format!("Failed to export '{}'", base_name))?;
        println!("{}", summary_line(base_name, trajectory.len()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_names_trajectory() {
        assert_eq!(
            summary_line("Circle Set", 1362),
            "Points Generated: 1362 (Circle Set)"
        );
    }

    #[test]
    fn test_all_selection_covers_every_trajectory() {
        let config = Config::default();
        let names: Vec<&str> = Selection::All
            .kinds()
            .iter()
            .map(|&kind| generate(&config, kind).1)
            .collect();
        assert_eq!(names, vec!["Circle Set", "Test Set", "Spiral", "Spiral Set"]);
    }
}
