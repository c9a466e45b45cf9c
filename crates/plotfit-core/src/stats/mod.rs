pub mod stats;

pub use stats::{mae, mean, std_dev};
