use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "plotfit",
    about = "Fit a polynomial curve to 2-D sample points",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// CSV file with one x,y sample pair per line (header optional)
    #[arg(value_name = "POINTS", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Degree of the polynomial basis
    #[arg(long, default_value_t = 5)]
    pub degree: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.00035)]
    pub eta: f64,

    /// Number of training epochs
    #[arg(long, default_value_t = 15000)]
    pub epochs: usize,

    /// Mini-batch size
    #[arg(long = "batch-size", default_value_t = 50)]
    pub batch_size: usize,

    /// L2 regularization strength
    #[arg(long, default_value_t = 0.01)]
    pub lambda: f64,

    /// Seed for weight initialization and epoch shuffling; omit for a
    /// non-deterministic run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full fit report as JSON instead of the equation
    #[arg(long)]
    pub json: bool,

    /// Suppress the per-epoch progress lines
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            input: self.input,
            degree: self.degree,
            eta: self.eta,
            epochs: self.epochs,
            batch_size: self.batch_size,
            lambda: self.lambda,
            seed: self.seed,
            json: self.json,
            quiet: self.quiet,
        }
    }
}
