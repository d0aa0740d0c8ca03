use accounts_core::{AccountId, AuthToken, DecodedToken, TokenClaims, TokenError, TokenIssuer};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Claims as they appear inside the JWT payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub email: String,
    pub id: AccountId,
    pub iat: u64,
    pub exp: u64,
}

/// HS256 JWT issuer keyed by a single process-wide secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    secret: Secret<String>,
}

impl JwtTokenIssuer {
    pub fn new(secret: Secret<String>) -> Result<Self, TokenError> {
        if secret.expose_secret().is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self { secret })
    }

    fn key(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, claims: &TokenClaims, ttl: Duration) -> Result<AuthToken, TokenError> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| TokenError::SigningFailed("Duration out of range".to_owned()))?;

        let claims = JwtClaims {
            email: claims.email.clone(),
            id: claims.id,
            iat: to_seconds(issued_at)?,
            exp: to_seconds(expires_at)?,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.key()))
            .map(AuthToken::new)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<DecodedToken, TokenError> {
        let claims = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.key()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(DecodedToken {
            claims: TokenClaims {
                email: claims.email,
                id: claims.id,
            },
            issued_at: from_seconds(claims.iat)?,
            expires_at: from_seconds(claims.exp)?,
        })
    }
}

fn to_seconds(instant: DateTime<Utc>) -> Result<u64, TokenError> {
    u64::try_from(instant.timestamp())
        .map_err(|_| TokenError::SigningFailed("Timestamp before epoch".to_owned()))
}

fn from_seconds(seconds: u64) -> Result<DateTime<Utc>, TokenError> {
    i64::try_from(seconds)
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .ok_or(TokenError::Invalid)
}
