use crate::sim_rate::SimRate;
use clap::Parser;
use std::path::PathBuf;

/// Animated solar system schematic
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ProgramArgs {
    /// Display settings file
    #[arg(long, default_value = "settings.yaml")]
    pub settings: PathBuf,

    /// Scene file replacing the built-in solar system
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Simulation speed: 1x, 2x, 5x, 10x or 50x
    #[arg(long, default_value = "1x")]
    pub rate: SimRate,
}

impl Default for ProgramArgs {
    fn default() -> Self {
        ProgramArgs {
            settings: PathBuf::from("settings.yaml"),
            scene: None,
            rate: SimRate::default(),
        }
    }
}
