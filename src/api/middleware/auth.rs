use axum::http::HeaderMap;

use crate::api::error::ApiError;

/// Username the authentication gateway vouched for, stored in request
/// extensions once the bearer token checks out.
#[derive(Clone, Debug, PartialEq)]
pub struct Principal(pub String);

/// Extract and validate Bearer token from Authorization header
pub async fn validate_auth(
    headers: &HeaderMap,
    secret_key: &str,
) -> Result<(), ApiError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

    // Expected format: "Bearer <token>"
    let parts: Vec<&str> = auth_header.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(ApiError::unauthorized(
            "Invalid authorization header format. Expected: Bearer <token>",
        ));
    }

    let token = parts[1];
    if token != secret_key {
        return Err(ApiError::unauthorized("Invalid authentication token"));
    }

    Ok(())
}

pub fn extract_principal(headers: &HeaderMap, header_name: &str) -> Result<Principal, ApiError> {
    let username = headers
        .get(header_name)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::unauthorized(format!("Missing {} header", header_name)))?;

    Ok(Principal(username.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[tokio::test]
    async fn test_bearer_token() {
        assert!(validate_auth(&headers(&[("authorization", "Bearer s3cret")]), "s3cret").await.is_ok());
        assert!(validate_auth(&headers(&[("authorization", "Bearer wrong")]), "s3cret").await.is_err());
        assert!(validate_auth(&headers(&[("authorization", "Basic s3cret")]), "s3cret").await.is_err());
        assert!(validate_auth(&headers(&[]), "s3cret").await.is_err());
    }

    #[test]
    fn test_principal_header() {
        let found = extract_principal(&headers(&[("x-authenticated-user", "gail")]), "x-authenticated-user").unwrap();
        assert_eq!(found, Principal("gail".to_string()));

        let blank = extract_principal(&headers(&[("x-authenticated-user", "  ")]), "x-authenticated-user");
        assert!(matches!(blank, Err(ApiError::Unauthorized(_))));
    }
}
