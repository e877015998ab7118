use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 副檔名只接受不帶點的英數字，例如 "md"
pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(ConvertError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one file extension is required".to_string(),
        });
    }

    for extension in extensions {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConvertError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: extension.clone(),
                reason: "Extension must be alphanumeric without a leading dot".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_folder", "./posts").is_ok());
        assert!(validate_path("input_folder", "").is_err());
        assert!(validate_path("input_folder", "po\0sts").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("post.max_title_length", 150, 1).is_ok());
        assert!(validate_positive_number("post.max_title_length", 0, 1).is_err());
    }

    #[test]
    fn test_validate_extensions() {
        let ok = vec!["markdown".to_string(), "md".to_string()];
        assert!(validate_extensions("input.extensions", &ok).is_ok());

        assert!(validate_extensions("input.extensions", &[]).is_err());
        assert!(validate_extensions("input.extensions", &[".md".to_string()]).is_err());
        assert!(validate_extensions("input.extensions", &["*".to_string()]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("ghost.language", "en_US").is_ok());
        assert!(validate_non_empty_string("ghost.language", "   ").is_err());
    }
}
