use crate::utils::error::AppError;

/// Extract a required request field, rejecting missing or blank values
pub fn required_field(value: &Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(AppError::ValidationError(format!("{} is required", name))),
    }
}
