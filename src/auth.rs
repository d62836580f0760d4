//! Demo authentication: two literal credential pairs and HS256 tokens.

use crate::config::AuthConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Merchant,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Merchant => "merchant",
            Role::Customer => "customer",
        }
    }
}

/// A hardcoded demo account
#[derive(Debug, Clone, Copy)]
pub struct DemoUser {
    pub id: &'static str,
    pub email: &'static str,
    password: &'static str,
    pub role: Role,
    pub name: &'static str,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: "merchant_001",
        email: "merchant@yumblock.com",
        password: "merchant123",
        role: Role::Merchant,
        name: "YumBlock Merchant",
    },
    DemoUser {
        id: "customer_001",
        email: "customer@test.com",
        password: "customer123",
        role: Role::Customer,
        name: "Test Customer",
    },
];

/// Look up a demo account by exact email and password
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoUser> {
    DEMO_USERS
        .iter()
        .find(|user| user.email == email && user.password == password)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Session expired. Please login again.")]
    Expired,

    #[error("Invalid token. Please login again.")]
    Invalid,

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Issues and verifies bearer tokens with a shared secret
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtAuth {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        JwtAuth {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, Duration::days(config.token_ttl_days))
    }

    pub fn issue(&self, user: &DemoUser) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user.id.to_string(),
            email: user.email.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
