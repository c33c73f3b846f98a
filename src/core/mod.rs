pub mod dataset;
pub mod drill;
pub mod engine;
pub mod suite;

pub use crate::domain::model::{
    Answer, Dataset, DrillReport, DrillSpec, InputSpec, MatchRecord, Problem, VariantRun,
};
pub use crate::domain::ports::{ConfigProvider, Drill, Storage};
pub use crate::utils::error::Result;
