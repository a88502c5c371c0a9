use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use color_eyre::Result;
use tokio::sync::RwLock;
use ulid::Ulid;

// ---------------------------------------------------------------------------
// CredentialVerifier trait (the service owns the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// The single teacher account configured through `ADMIN_USERNAME` and
/// `ADMIN_PASSWORD`.
#[derive(Clone)]
pub struct EnvCredentials {
    username: String,
    password: String,
}

impl EnvCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for EnvCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<bool> {
        Ok(username == self.username && password == self.password)
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

pub enum LoginOutcome {
    /// Login succeeded. Contains the session token.
    Success(String),
    /// Username or password did not match.
    InvalidCredentials,
}

// ---------------------------------------------------------------------------
// AuthService
// ---------------------------------------------------------------------------

/// How long a teacher stays signed in. The session cookie carries the same
/// max age.
pub const SESSION_TTL: Duration = Duration::from_secs(3600);

/// Checks credentials and tracks which session tokens are signed in.
///
/// Tokens are opaque ULIDs mapped to the instant they were issued; the
/// authenticated state lives here, never in the cookie.
pub struct AuthService<V: CredentialVerifier = EnvCredentials> {
    verifier: V,
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<String, Instant>>>,
}

impl<V: CredentialVerifier + Clone> Clone for AuthService<V> {
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            ttl: self.ttl,
            sessions: self.sessions.clone(),
        }
    }
}

impl<V: CredentialVerifier> AuthService<V> {
    pub fn new(verifier: V) -> Self {
        Self::with_ttl(verifier, SESSION_TTL)
    }

    pub fn with_ttl(verifier: V, ttl: Duration) -> Self {
        Self {
            verifier,
            ttl,
            sessions: Arc::default(),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        if !self.verifier.verify(username, password).await? {
            tracing::warn!("teacher login rejected");
            return Ok(LoginOutcome::InvalidCredentials);
        }

        let token = Ulid::new().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, issued| issued.elapsed() < self.ttl);
        sessions.insert(token.clone(), Instant::now());

        tracing::info!("teacher session created");
        Ok(LoginOutcome::Success(token))
    }

    pub async fn is_authenticated(&self, token: &str) -> bool {
        let issued = self.sessions.read().await.get(token).copied();

        match issued {
            Some(issued) if issued.elapsed() < self.ttl => true,
            Some(_) => {
                self.sessions.write().await.remove(token);
                tracing::info!("teacher session expired");
                false
            }
            None => false,
        }
    }

    pub async fn logout(&self, token: &str) {
        if self.sessions.write().await.remove(token).is_some() {
            tracing::info!("teacher session ended");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
