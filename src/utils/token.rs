use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub fn issue_token(user_id: Uuid, email: &str, secret: &str, ttl_hours: i64) -> Result<String> {
    let exp = Duration::try_hours(ttl_hours)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| {
            Error::Internal(format!("token lifetime of {} hours is out of range", ttl_hours))
        })?
        .timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("failed to sign token: {}", e)))?;
    Ok(token)
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| Error::Unauthorized(format!("Invalid token: {}", e)))?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_with_same_secret() {
        let id = Uuid::new_v4();
        let token = issue_token(id, "bob@mail.com", "secret", 1).unwrap();
        let claims = decode_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.email, "bob@mail.com");
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let token = issue_token(Uuid::new_v4(), "bob@mail.com", "secret", 1).unwrap();
        assert!(matches!(
            decode_token(&token, "other"),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let token = issue_token(Uuid::new_v4(), "bob@mail.com", "secret", -2).unwrap();
        assert!(matches!(
            decode_token(&token, "secret"),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn unrepresentable_lifetime_is_an_internal_error() {
        let res = issue_token(Uuid::new_v4(), "bob@mail.com", "secret", i64::MAX);
        assert!(matches!(res, Err(Error::Internal(_))));
    }
}
