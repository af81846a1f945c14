pub mod extremes;

pub use extremes::{Extremum, ExtremesAnalyzer};
