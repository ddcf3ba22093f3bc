use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

/// The only token type issued; there is no refresh flow.
const ACCESS_TOKEN: &str = "access";

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: Uuid, token_type: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        if token_type != ACCESS_TOKEN {
            return Err(ServiceError::InvalidTokenType);
        }
        let exp = now + Duration::minutes(60);

        let claims = Claims {
            user_id,
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Uuid, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        if token_data.claims.exp < Utc::now().timestamp() as usize {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips_user_id() {
        let jwt = JwtConfig::new("topolmaysan");
        let user_id = Uuid::new_v4();

        let token = jwt.generate_token(user_id, "access").unwrap();

        assert_eq!(jwt.verify_token(&token, "access").unwrap(), user_id);
        assert!(matches!(
            jwt.verify_token(&token, "refresh"),
            Err(ServiceError::InvalidTokenType)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtConfig::new("one")
            .generate_token(Uuid::new_v4(), "access")
            .unwrap();

        assert!(matches!(
            JwtConfig::new("two").verify_token(&token, "access"),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn unknown_token_type_is_refused() {
        let jwt = JwtConfig::new("secret");
        assert!(matches!(
            jwt.generate_token(Uuid::new_v4(), "refresh"),
            Err(ServiceError::InvalidTokenType)
        ));
    }
}
