use crate::utils::error::{DocgenError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DocgenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DocgenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects column tables where two logical fields point at the same index.
pub fn validate_distinct_columns(field_name: &str, columns: &[(&str, usize)]) -> Result<()> {
    let mut seen = HashSet::new();

    for (name, index) in columns {
        if !seen.insert(*index) {
            return Err(DocgenError::InvalidConfigValueError {
                field: format!("{}.{}", field_name, name),
                value: index.to_string(),
                reason: "Column index is already used by another field".to_string(),
            });
        }
    }

    Ok(())
}
