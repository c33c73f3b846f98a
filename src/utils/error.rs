use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown problem: {name}")]
    UnknownProblemError { name: String },

    #[error("Unknown variant '{variant}' for problem '{problem}'")]
    UnknownVariantError { problem: String, variant: String },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("Drill processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Dataset,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::IoError(_) => ErrorCategory::Io,
            DrillError::CsvError(_) | DrillError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. }
            | DrillError::UnknownProblemError { .. }
            | DrillError::UnknownVariantError { .. } => ErrorCategory::Configuration,
            DrillError::DatasetError { .. } => ErrorCategory::Dataset,
            DrillError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrillError::IoError(_) => ErrorSeverity::Critical,
            DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. }
            | DrillError::UnknownProblemError { .. }
            | DrillError::UnknownVariantError { .. }
            | DrillError::DatasetError { .. } => ErrorSeverity::High,
            DrillError::CsvError(_)
            | DrillError::SerializationError(_)
            | DrillError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DrillError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            DrillError::CsvError(_) => {
                "Check the dataset file: one integer record per line is expected".to_string()
            }
            DrillError::SerializationError(_) => {
                "Report serialization failed; re-run with --verbose for details".to_string()
            }
            DrillError::ConfigValidationError { field, .. }
            | DrillError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and try again", field)
            }
            DrillError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            DrillError::UnknownProblemError { .. } => {
                "Valid problems: two-sum, subsequence, sorted-squares, coin-change, tournament"
                    .to_string()
            }
            DrillError::UnknownVariantError { problem, .. } => format!(
                "Run with an empty variant list to use every registered variant of '{}'",
                problem
            ),
            DrillError::DatasetError { .. } => {
                "Adjust the input specification so it produces a usable dataset".to_string()
            }
            DrillError::ProcessingError { .. } => {
                "Re-run with --verbose to see the failing phase".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::IoError(e) => format!("File system problem: {}", e),
            DrillError::CsvError(e) => format!("Could not read the dataset file: {}", e),
            DrillError::SerializationError(e) => format!("Could not write the report: {}", e),
            DrillError::UnknownProblemError { name } => {
                format!("'{}' is not a known problem", name)
            }
            DrillError::UnknownVariantError { problem, variant } => {
                format!("'{}' is not a registered variant of '{}'", variant, problem)
            }
            other => other.to_string(),
        }
    }
}
