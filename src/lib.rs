pub mod algos;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};
pub use config::PlanConfig;

pub use core::drill::ProblemDrill;
pub use core::{engine::DrillEngine, suite::DrillSuite};
pub use domain::model::{Answer, Dataset, DrillReport, DrillSpec, InputSpec, Problem};
pub use domain::ports::{ConfigProvider, Drill, Storage};
pub use utils::error::{DrillError, Result};
