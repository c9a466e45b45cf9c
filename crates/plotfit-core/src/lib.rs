pub mod fit;
pub mod stats;
pub mod trainevent;

pub use fit::fiterror::{FitError, FitResult};
pub use fit::polymodel::PolyModel;
pub use fit::report::FitReport;
pub use fit::scaling::Scaling;
pub use trainevent::{PrintSink, TrainEvent, TrainEventSink};
