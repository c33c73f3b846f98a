use crate::utils::error::{DrillError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 數列生成需要非零且正向的步進值
pub fn validate_stride(field_name: &str, start: i64, end: i64, step: i64) -> Result<()> {
    if step <= 0 {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: step.to_string(),
            reason: "Step must be a positive integer".to_string(),
        });
    }
    if start > end {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: "Range start must not exceed range end".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(DrillError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(DrillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DrillError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_stride() {
        assert!(validate_stride("input", -50000, 50000, 9).is_ok());
        assert!(validate_stride("input", 0, 10, 0).is_err());
        assert!(validate_stride("input", 10, 0, 1).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rounds", 5, 1).is_ok());
        assert!(validate_positive_number("rounds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["data.csv".to_string(), "more.txt".to_string()];
        assert!(validate_file_extensions("dataset_file", &files, &["csv", "txt"]).is_ok());

        let invalid_files = vec!["data.parquet".to_string()];
        assert!(validate_file_extensions("dataset_file", &invalid_files, &["csv", "txt"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(888i64);
        assert_eq!(*validate_required_field("target", &present).unwrap(), 888);

        let absent: Option<i64> = None;
        assert!(validate_required_field("target", &absent).is_err());
    }
}
