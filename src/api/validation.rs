use crate::api::error::ApiError;

pub fn validate_record_id(id_str: &str) -> Result<i64, ApiError> {
    id_str
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("Invalid id '{}'", id_str)))
}

pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id() {
        assert_eq!(validate_record_id("17").unwrap(), 17);
        assert!(validate_record_id("abc").is_err());
        assert!(validate_record_id("").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("food", "Category").is_ok());
        let err = validate_not_empty("  ", "Category").unwrap_err();
        assert_eq!(err.message(), "Category cannot be empty");
    }
}
