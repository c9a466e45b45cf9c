use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Predict,
    Gradient,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Predict => write!(f, "prediction"),
            Stage::Gradient => write!(f, "gradient"),
        }
    }
}

#[derive(Debug)]
pub enum FitError {
    NumericInstability { stage: Stage },
    EmptySampleSet,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::NumericInstability { stage } => {
                write!(
                    f,
                    "non-finite values encountered during {stage}, try reducing the learning parameters"
                )
            },
            FitError::EmptySampleSet => {
                write!(f, "no samples to evaluate")
            },
        }
    }
}

impl std::error::Error for FitError {}

pub type FitResult<T> = Result<T, FitError>;
