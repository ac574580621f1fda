use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, Error};

/// Bearer tokens are valid for a single shift plus slack.
const TOKEN_TTL_HOURS: i64 = 12;

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin account ID.
    pub sub: i32,
    /// Display name, shown in the dashboard header.
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl AdminClaims {
    pub fn new(account_id: i32, display_name: &str) -> Self {
        let now = Utc::now();

        Self {
            sub: account_id,
            name: display_name.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }

    /// Sign these claims into a compact JWT.
    pub fn encode(&self, secret: &str) -> Result<String, Error> {
        let token = jsonwebtoken::encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// Signature or expiry failures map to [`AuthError::InvalidToken`] so the
    /// caller responds 401 rather than 500.
    pub fn decode(token: &str, secret: &str) -> Result<Self, Error> {
        let data = jsonwebtoken::decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::AdminClaims;
    use crate::server::error::{auth::AuthError, Error};

    const SECRET: &str = "curbside-test-secret";

    #[test]
    fn round_trips_claims() {
        let claims = AdminClaims::new(7, "Dispatch");

        let token = claims.encode(SECRET).unwrap();
        let decoded = AdminClaims::decode(&token, SECRET).unwrap();

        assert_eq!(decoded.sub, 7);
        assert_eq!(decoded.name, "Dispatch");
    }

    #[test]
    fn rejects_wrong_secret() {
        let claims = AdminClaims::new(7, "Dispatch");

        let token = claims.encode(SECRET).unwrap();
        let result = AdminClaims::decode(&token, "some-other-secret");

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidToken))
        ));
    }

    #[test]
    fn rejects_garbage_token() {
        let result = AdminClaims::decode("not-a-jwt", SECRET);

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidToken))
        ));
    }
}
