use plotfit_core::fit::report::FitReport;
use plotfit_core::trainevent::{NullSink, PrintSink, TrainEventSink};
use plotfit_core::{FitError, PolyModel, Scaling};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::PathBuf;

const CURVE_POINTS: usize = 300;

#[derive(Debug)]
pub struct Config {
    pub input: PathBuf,
    pub degree: usize,
    pub eta: f64,
    pub epochs: usize,
    pub batch_size: usize,
    pub lambda: f64,
    pub seed: Option<u64>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("fit error: {0}")]
    Fit(#[from] FitError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Msg(String),
}

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        let samples = read_samples(&self.input)?;

        // Caller-side validation: the trainer itself assumes a non-empty,
        // finite, normalized sample set.
        if samples.is_empty() {
            return Err(CmdError::Msg("no samples to analyze".into()));
        }
        if self.batch_size < 1 {
            return Err(CmdError::Msg("batch size must be at least 1".into()));
        }

        let scaling = Scaling::from_samples(&samples);
        if scaling.x_std == 0.0 || scaling.y_std == 0.0 {
            return Err(CmdError::Msg("degenerate data: no variance on one axis".into()));
        }
        let normalized = scaling.normalize(&samples);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut model = PolyModel::new(
            self.degree,
            self.eta,
            self.epochs,
            self.batch_size,
            self.lambda,
            &mut rng,
        );

        let mut print_sink = PrintSink;
        let mut null_sink = NullSink;
        let sink: &mut dyn TrainEventSink =
            if self.quiet { &mut null_sink } else { &mut print_sink };

        model.train(&normalized, &mut rng, sink)?;
        let loss = model.evaluate(&normalized)?;

        let weights = scaling.denormalize_weights(&model.weights());

        let x_min = samples.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
        let x_max = samples.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);
        let report = FitReport::new(weights, loss, x_min, x_max, CURVE_POINTS);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Learned weights (original scale): {:?}", report.weights);
            println!("Polynomial: {}", report.equation);
        }
        Ok(())
    }
}

fn read_samples(path: &PathBuf) -> Result<Vec<(f64, f64)>, CmdError> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut samples = Vec::new();
    for (i, r) in rdr.records().enumerate() {
        let record = r?;
        if record.len() < 2 {
            return Err(CmdError::Msg(format!("line {}: expected x,y pair", i + 1)));
        }
        let x = record[0].parse::<f64>();
        let y = record[1].parse::<f64>();
        match (x, y) {
            (Ok(x), Ok(y)) => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(CmdError::Msg(format!("line {}: non-finite sample", i + 1)));
                }
                samples.push((x, y));
            },
            _ if i == 0 => continue, // header row
            _ => {
                return Err(CmdError::Msg(format!(
                    "line {}: could not parse '{}' as numbers",
                    i + 1,
                    record.iter().collect::<Vec<_>>().join(",")
                )))
            },
        }
    }
    Ok(samples)
}
