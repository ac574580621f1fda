use axum::http::{header, HeaderMap};

use crate::server::{
    config::Config,
    error::{auth::AuthError, Error},
    model::auth::AdminClaims,
};

/// Extract and validate the admin bearer token from request headers.
///
/// Returns the token's claims on success; missing or malformed headers and
/// invalid tokens surface as 401s via [`AuthError`].
pub fn require_admin(headers: &HeaderMap, config: &Config) -> Result<AdminClaims, Error> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = value.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)?;

    AdminClaims::decode(token, &config.jwt_secret)
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};

    use crate::server::{
        config::Config,
        controller::util::auth::require_admin,
        error::{auth::AuthError, Error},
        model::auth::AdminClaims,
    };

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn accepts_valid_bearer_token() {
        let config = Config::local_defaults();
        let token = AdminClaims::new(3, "Dispatch")
            .encode(&config.jwt_secret)
            .unwrap();

        let claims = require_admin(&headers_with(&format!("Bearer {}", token)), &config).unwrap();

        assert_eq!(claims.sub, 3);
    }

    #[test]
    fn rejects_missing_header() {
        let config = Config::local_defaults();

        let result = require_admin(&HeaderMap::new(), &config);

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::MissingToken))
        ));
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let config = Config::local_defaults();

        let result = require_admin(&headers_with("Basic dXNlcjpwYXNz"), &config);

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::MissingToken))
        ));
    }

    #[test]
    fn rejects_invalid_token() {
        let config = Config::local_defaults();

        let result = require_admin(&headers_with("Bearer garbage"), &config);

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidToken))
        ));
    }
}
