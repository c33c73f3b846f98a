use crate::domain::model::{DrillSpec, InputSpec, Problem};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "algo-drills")]
#[command(about = "Run and time classic array drills against every registered variant")]
pub struct CliConfig {
    #[arg(long, default_value = "two-sum")]
    pub problem: String,

    /// Comma-separated variant names; empty means every registered variant
    #[arg(long, value_delimiter = ',')]
    pub variants: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// CSV file with one integer record per line, used instead of a generated range
    #[arg(long)]
    pub dataset_file: Option<String>,

    #[arg(long, default_value = "-50000", allow_hyphen_values = true)]
    pub range_start: i64,

    #[arg(long, default_value = "50000", allow_hyphen_values = true)]
    pub range_end: i64,

    #[arg(long, default_value = "9")]
    pub range_step: i64,

    #[arg(long, help = "Shuffle the generated input")]
    pub shuffle: bool,

    #[arg(long, default_value = "888", allow_hyphen_values = true)]
    pub target: i64,

    #[arg(long, default_value = "10")]
    pub rounds: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl CliConfig {
    pub fn drill_spec(&self) -> Result<DrillSpec> {
        let problem: Problem = self.problem.parse()?;

        let input = if let Some(file) = &self.dataset_file {
            InputSpec::File { path: file.clone() }
        } else if problem == Problem::Tournament {
            InputSpec::Fixtures {
                rounds: self.rounds,
            }
        } else {
            InputSpec::Range {
                start: self.range_start,
                end: self.range_end,
                step: self.range_step,
                shuffle: self.shuffle,
            }
        };

        Ok(DrillSpec {
            name: format!("{}-drill", problem),
            problem,
            variants: self.variants.clone(),
            input,
            candidate: None,
            target: (problem == Problem::TwoSum).then_some(self.target),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let problem: Problem = self.problem.parse()?;

        validation::validate_path("output_path", &self.output_path)?;

        for variant in &self.variants {
            if !crate::algos::is_registered(problem, variant) {
                return Err(crate::utils::error::DrillError::UnknownVariantError {
                    problem: problem.to_string(),
                    variant: variant.clone(),
                });
            }
        }

        if let Some(file) = &self.dataset_file {
            if problem == Problem::Tournament {
                return Err(crate::utils::error::DrillError::InvalidConfigValueError {
                    field: "dataset_file".to_string(),
                    value: file.clone(),
                    reason: "Tournament drills generate fixtures and take no dataset file"
                        .to_string(),
                });
            }
            validation::validate_file_extensions(
                "dataset_file",
                std::slice::from_ref(file),
                &["csv", "txt"],
            )?;
        } else if problem == Problem::Tournament {
            validation::validate_positive_number("rounds", self.rounds, 1)?;
        } else {
            validation::validate_stride(
                "range",
                self.range_start,
                self.range_end,
                self.range_step,
            )?;
            if problem == Problem::CoinChange && self.range_start <= 0 {
                return Err(crate::utils::error::DrillError::InvalidConfigValueError {
                    field: "range_start".to_string(),
                    value: self.range_start.to_string(),
                    reason: "Coin denominations must be positive".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn drill_specs(&self) -> Result<Vec<DrillSpec>> {
        Ok(vec![self.drill_spec()?])
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    // 絕對路徑直接使用，相對路徑以 base_path 為根
    fn resolve(&self, path: &str) -> std::path::PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            Path::new(&self.base_path).join(path)
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
