use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::SheetsError;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Service-account credential for the Sheets API.
///
/// Signs an RS256 assertion with the account's private key and trades it for
/// a short-lived access token. Tokens are cached until shortly before expiry,
/// so concurrent requests share one exchange.
pub struct ServiceAccountAuth {
    client_email: String,
    key: EncodingKey,
    token_url: String,
    http: reqwest::Client,
    cached: RwLock<Option<CachedToken>>,
}

struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        // 60s of leeway so we never hand out a token about to expire
        self.expires_at - Duration::seconds(60) > Utc::now()
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

impl ServiceAccountAuth {
    pub fn new(
        client_email: &str,
        private_key_pem: &str,
        token_url: &str,
        http: reqwest::Client,
    ) -> Result<Self, SheetsError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| SheetsError::Auth(format!("Invalid service account private key: {e}")))?;

        Ok(Self {
            client_email: client_email.to_string(),
            key,
            token_url: token_url.to_string(),
            http,
            cached: RwLock::new(None),
        })
    }

    /// Returns a valid access token, exchanging a fresh assertion if needed.
    pub async fn token(&self) -> Result<String, SheetsError> {
        {
            let guard = self.cached.read().await;
            if let Some(token) = guard.as_ref() {
                if token.is_fresh() {
                    return Ok(token.value.clone());
                }
            }
        }

        let mut guard = self.cached.write().await;

        // Another request may have refreshed while we waited for the lock
        if let Some(token) = guard.as_ref() {
            if token.is_fresh() {
                return Ok(token.value.clone());
            }
        }

        let assertion = self.sign_assertion()?;

        let resp = self
            .http
            .post(&self.token_url)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .await
            .map_err(|e| SheetsError::Auth(format!("Token request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetsError::Auth(format!(
                "Token exchange rejected ({status}): {body}"
            )));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| SheetsError::Auth(format!("Malformed token response: {e}")))?;

        let expires_at = Utc::now() + Duration::seconds(token.expires_in);
        let value = token.access_token.clone();
        *guard = Some(CachedToken {
            value: token.access_token,
            expires_at,
        });

        tracing::debug!("Obtained Google API access token");
        Ok(value)
    }

    fn sign_assertion(&self) -> Result<String, SheetsError> {
        let now = Utc::now();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.token_url,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|e| SheetsError::Auth(format!("Failed to sign token assertion: {e}")))
    }
}
