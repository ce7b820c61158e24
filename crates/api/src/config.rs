use vitals_core::inbox::policy::{
    parse_priority, GenerationPolicy, DEFAULT_ACTIVITY_CUTOFF_MINUTE,
    DEFAULT_WORKOUT_LEAD_MINUTES,
};
use vitals_core::types::MinuteOfDay;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on post-shutdown cleanup in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Inbox generation policy.
    pub inbox: GenerationPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`inbox_policy_from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            inbox: inbox_policy_from_env(),
        }
    }
}

/// Load the inbox generation policy.
///
/// | Env Var                        | Default                            |
/// |--------------------------------|------------------------------------|
/// | `INBOX_WORKOUT_LEAD_MINS`      | `30`                               |
/// | `INBOX_ACTIVITY_CUTOFF_MINUTE` | `1200` (20:00)                     |
/// | `INBOX_PRIORITY`               | `metrics,checkin,workout,vitamins` |
///
/// # Panics
///
/// Panics on unparseable or out-of-range values.
pub fn inbox_policy_from_env() -> GenerationPolicy {
    let workout_lead_minutes: i64 = std::env::var("INBOX_WORKOUT_LEAD_MINS")
        .map(|v| v.parse().expect("INBOX_WORKOUT_LEAD_MINS must be a valid i64"))
        .unwrap_or(DEFAULT_WORKOUT_LEAD_MINUTES);

    let activity_cutoff_minute: MinuteOfDay = std::env::var("INBOX_ACTIVITY_CUTOFF_MINUTE")
        .map(|v| {
            v.parse()
                .expect("INBOX_ACTIVITY_CUTOFF_MINUTE must be a valid i16")
        })
        .unwrap_or(DEFAULT_ACTIVITY_CUTOFF_MINUTE);

    let priority = match std::env::var("INBOX_PRIORITY") {
        Ok(v) => parse_priority(&v).unwrap_or_else(|e| panic!("Invalid INBOX_PRIORITY: {e}")),
        Err(_) => GenerationPolicy::default().priority,
    };

    let policy = GenerationPolicy {
        priority,
        workout_lead_minutes,
        activity_cutoff_minute,
        ..Default::default()
    };
    if let Err(e) = policy.validate() {
        panic!("Invalid inbox policy: {e}");
    }
    policy
}
