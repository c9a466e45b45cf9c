pub mod fiterror;
pub mod polymodel;
pub mod report;
pub mod scaling;

pub use fiterror::{FitError, FitResult};
pub use polymodel::PolyModel;
pub use report::FitReport;
pub use scaling::Scaling;
