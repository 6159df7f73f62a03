use std::path::PathBuf;

use clap::Parser;

use algotty::array::DEFAULT_ARRAY_SIZE;
use algotty::playback::settings::{DEFAULT_SPEED, DEFAULT_TARGET};
use algotty::playback::Settings;

#[derive(Debug, Parser, Clone)]
#[command(name = "algotty")]
#[command(about = "Step through sorting and subset-sum algorithms in the terminal")]
pub struct Cli {
    /// Algorithm to visualize (e.g. "Bubble Sort", quick, subset-sum).
    #[arg(long, short, default_value = "Bubble Sort")]
    pub algorithm: String,

    /// Number of elements in the generated array.
    #[arg(long, short = 'n', default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Playback speed; the delay between steps is 300 - speed milliseconds.
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Target sum for Subset Sum.
    #[arg(long, short, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: i64,

    /// Seed for array generation, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new(self.algorithm.clone());
        settings.size = self.size;
        settings.target = self.target;
        settings.seed = self.seed;
        settings.set_speed(self.speed);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["algotty"]);
        let settings = cli.settings();
        assert_eq!(settings, Settings::default());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "algotty",
            "--algorithm",
            "subset-sum",
            "--size",
            "8",
            "--speed",
            "500",
            "--target",
            "-3",
            "--seed",
            "7",
        ]);
        let settings = cli.settings();
        assert_eq!(settings.algorithm, "subset-sum");
        assert_eq!(settings.size, 8);
        assert_eq!(settings.speed(), 200);
        assert_eq!(settings.target, -3);
        assert_eq!(settings.seed, Some(7));
    }
}
