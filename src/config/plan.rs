use crate::domain::model::{DrillSpec, InputSpec, Problem};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 以 TOML 描述的一份練習計畫
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub plan: PlanMeta,
    #[serde(default)]
    pub defaults: PlanDefaults,
    #[serde(default)]
    pub drills: Vec<DrillEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMeta {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanDefaults {
    pub output_path: Option<String>,
    pub seed: Option<u64>,
    pub monitoring: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillEntry {
    pub name: String,
    pub problem: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub input: InputSpec,
    #[serde(default)]
    pub candidate: Option<InputSpec>,
    #[serde(default)]
    pub target: Option<i64>,
}

fn default_enabled() -> bool {
    true
}

impl DrillEntry {
    pub fn to_spec(&self) -> Result<DrillSpec> {
        Ok(DrillSpec {
            name: self.name.clone(),
            problem: self.problem.parse()?,
            variants: self.variants.clone(),
            input: self.input.clone(),
            candidate: self.candidate.clone(),
            target: self.target,
        })
    }
}

impl PlanConfig {
    /// 從 TOML 檔案載入計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證計畫的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("plan.name", &self.plan.name)?;
        validation::validate_path("defaults.output_path", self.output_path())?;

        if self.drills.is_empty() {
            return Err(DrillError::ConfigValidationError {
                field: "drills".to_string(),
                message: "A plan needs at least one drill".to_string(),
            });
        }

        for entry in &self.drills {
            let field = format!("drills.{}", entry.name);
            validation::validate_non_empty_string(&field, &entry.name)?;

            let problem: Problem = entry.problem.parse()?;

            for variant in &entry.variants {
                if !crate::algos::is_registered(problem, variant) {
                    return Err(DrillError::UnknownVariantError {
                        problem: problem.to_string(),
                        variant: variant.clone(),
                    });
                }
            }

            Self::validate_input(&field, problem, &entry.input)?;

            if problem == Problem::Tournament && !matches!(entry.input, InputSpec::Fixtures { .. })
            {
                return Err(DrillError::InvalidConfigValueError {
                    field: format!("{}.input", field),
                    value: entry.problem.clone(),
                    reason: "Tournament drills need a fixtures input".to_string(),
                });
            }

            if problem == Problem::TwoSum && entry.target.is_none() {
                return Err(DrillError::MissingConfigError {
                    field: format!("{}.target", field),
                });
            }
        }

        Ok(())
    }

    fn validate_input(field: &str, problem: Problem, input: &InputSpec) -> Result<()> {
        match input {
            InputSpec::Range {
                start, end, step, ..
            } => {
                validation::validate_stride(field, *start, *end, *step)?;
                if problem == Problem::CoinChange && *start <= 0 {
                    return Err(DrillError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: start.to_string(),
                        reason: "Coin denominations must be positive".to_string(),
                    });
                }
                Ok(())
            }
            InputSpec::File { path } => validation::validate_file_extensions(
                field,
                std::slice::from_ref(path),
                &["csv", "txt"],
            ),
            InputSpec::Inline { values } => {
                if values.is_empty() && problem != Problem::Subsequence {
                    return Err(DrillError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: "[]".to_string(),
                        reason: "Inline input cannot be empty".to_string(),
                    });
                }
                Ok(())
            }
            InputSpec::Fixtures { rounds } => {
                if problem != Problem::Tournament {
                    return Err(DrillError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: "fixtures".to_string(),
                        reason: format!("Fixture input only fits 'tournament', not '{}'", problem),
                    });
                }
                validation::validate_positive_number(field, *rounds, 1)
            }
        }
    }

    /// 取得輸出路徑
    pub fn output_path(&self) -> &str {
        self.defaults.output_path.as_deref().unwrap_or("./output")
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.defaults.monitoring.unwrap_or(false)
    }

    /// 只回傳啟用的練習
    pub fn enabled_drills(&self) -> impl Iterator<Item = &DrillEntry> {
        self.drills.iter().filter(|d| d.enabled)
    }
}

impl ConfigProvider for PlanConfig {
    fn output_path(&self) -> &str {
        self.output_path()
    }

    fn seed(&self) -> Option<u64> {
        self.defaults.seed
    }

    fn drill_specs(&self) -> Result<Vec<DrillSpec>> {
        self.enabled_drills().map(|entry| entry.to_spec()).collect()
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_PLAN: &str = r#"
[plan]
name = "weekday-drills"
description = "Morning practice"
version = "1.0.0"

[defaults]
output_path = "./drill-output"
seed = 42

[[drills]]
name = "two-sum-warmup"
problem = "two-sum"
variants = ["hash-map", "two-pointer"]
target = 888

[drills.input]
kind = "range"
start = -50000
end = 50000
step = 9
shuffle = true

[[drills]]
name = "coins"
problem = "coin-change"
enabled = false

[drills.input]
kind = "inline"
values = [1, 2, 3, 3]
"#;

    #[test]
    fn test_parse_basic_plan() {
        let config = PlanConfig::from_toml_str(BASIC_PLAN).unwrap();

        assert_eq!(config.plan.name, "weekday-drills");
        assert_eq!(config.output_path(), "./drill-output");
        assert_eq!(config.defaults.seed, Some(42));
        assert_eq!(config.drills.len(), 2);
        assert!(config.validate().is_ok());

        let specs = config.drill_specs().unwrap();
        assert_eq!(specs.len(), 1); // 停用的練習被濾掉
        assert_eq!(specs[0].problem, Problem::TwoSum);
        assert_eq!(specs[0].variants, vec!["hash-map", "two-pointer"]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DRILL_TEST_OUTPUT", "./from-env");

        let toml_content = r#"
[plan]
name = "env-test"
description = "env"
version = "1.0"

[defaults]
output_path = "${DRILL_TEST_OUTPUT}"

[[drills]]
name = "coins"
problem = "coin-change"

[drills.input]
kind = "inline"
values = [1, 2]
"#;

        let config = PlanConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "./from-env");

        std::env::remove_var("DRILL_TEST_OUTPUT");
    }

    #[test]
    fn test_two_sum_without_target_fails_validation() {
        let toml_content = r#"
[plan]
name = "missing-target"
description = "bad"
version = "1.0"

[[drills]]
name = "two-sum"
problem = "two-sum"

[drills.input]
kind = "inline"
values = [1, 2, 3]
"#;

        let config = PlanConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DrillError::MissingConfigError { .. }));
    }

    #[test]
    fn test_fixture_input_only_fits_tournament() {
        let toml_content = r#"
[plan]
name = "bad-fixtures"
description = "bad"
version = "1.0"

[[drills]]
name = "coins"
problem = "coin-change"

[drills.input]
kind = "fixtures"
rounds = 10
"#;

        let config = PlanConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_plan_fails_validation() {
        let toml_content = r#"
[plan]
name = "empty"
description = "no drills"
version = "1.0"
"#;

        let config = PlanConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_plan_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_PLAN.as_bytes()).unwrap();

        let config = PlanConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.plan.name, "weekday-drills");
    }
}
