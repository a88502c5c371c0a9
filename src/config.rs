use std::path::PathBuf;

use axum_extra::extract::cookie::Key;
use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::{eyre::bail, Result};

use crate::services::auth::EnvCredentials;

/// Signing secret used outside production when none is configured.
pub const DEV_SESSION_SECRET: &str = "card_clash_dev_secret_do_not_use_in_production";

/// Shortest secret the cookie key derivation accepts.
pub const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// The host to bind to.
    #[arg(long, env, default_value = "127.0.0.1")]
    pub host: String,

    /// The port to bind to.
    #[arg(short, long, env, default_value_t = 3000)]
    pub port: u16,

    /// Port used instead of `port` when serving HTTPS.
    #[arg(long, env)]
    pub https_port: Option<u16>,

    #[arg(long = "environment", env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Secret the session cookie is signed with. Required in production.
    #[arg(long, env, hide_env_values = true)]
    pub session_secret: Option<String>,

    #[arg(long, env, default_value = "admin")]
    pub admin_username: String,

    #[arg(long, env, default_value = "password", hide_env_values = true)]
    pub admin_password: String,

    /// Serve over TLS using `tls_cert` and `tls_key`, generating a
    /// self-signed pair when they are missing. `--https false` serves HTTP.
    #[arg(long, env, default_value_t = true, action = ArgAction::Set)]
    pub https: bool,

    /// PEM certificate chain.
    #[arg(long, env, default_value = "certs/localhost-cert.pem")]
    pub tls_cert: PathBuf,

    /// PEM PKCS#8 private key.
    #[arg(long, env, default_value = "certs/localhost-key.pem")]
    pub tls_key: PathBuf,

    /// Directory holding the Unity WebGL build and other public files.
    #[arg(long, env, default_value = "public")]
    pub public_dir: PathBuf,
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// The cookie signing secret, or an error when the server must not start.
    pub fn session_secret(&self) -> Result<&str> {
        let secret = match (self.session_secret.as_deref(), self.is_production()) {
            (Some(secret), _) => secret,
            (None, true) => bail!(
                "SESSION_SECRET environment variable is not set. Refusing to start in production."
            ),
            (None, false) => {
                tracing::warn!("SESSION_SECRET not set, using the development secret");
                DEV_SESSION_SECRET
            }
        };

        if secret.len() < MIN_SESSION_SECRET_LEN {
            bail!("SESSION_SECRET must be at least {MIN_SESSION_SECRET_LEN} bytes long");
        }

        Ok(secret)
    }

    pub fn cookie_key(&self) -> Result<Key> {
        Ok(Key::derive_from(self.session_secret()?.as_bytes()))
    }

    pub fn credentials(&self) -> EnvCredentials {
        EnvCredentials::new(&self.admin_username, &self.admin_password)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn https_address(&self) -> String {
        format!("{}:{}", self.host, self.https_port.unwrap_or(self.port))
    }
}
