use std::{env, fmt::Display, path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use tracing::{info, warn};

use crate::api::{HttpService, LocalService, SharedService};
use crate::error::{Error, Result};

pub struct Config {
    pub api_url: String,
    pub cashier_poll_interval: Duration,
    pub preparation_poll_interval: Duration,
    pub notice_duration: Duration,
    pub database_path: Option<PathBuf>,
    pub admin_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: "http://localhost:8000".to_string(),
            cashier_poll_interval: Duration::from_secs(10),
            preparation_poll_interval: Duration::from_secs(5),
            notice_duration: Duration::from_secs(3),
            database_path: None,
            admin_password: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            api_url: try_load(&lookup, "DRINKS_API_URL", "http://localhost:8000")?,
            cashier_poll_interval: seconds(&lookup, "DRINKS_CASHIER_POLL_SECS", "10")?,
            preparation_poll_interval: seconds(&lookup, "DRINKS_PREPARATION_POLL_SECS", "5")?,
            notice_duration: seconds(&lookup, "DRINKS_NOTICE_SECS", "3")?,
            database_path: lookup("DRINKS_DATABASE").map(PathBuf::from),
            admin_password: lookup("DRINKS_ADMIN_PASSWORD"),
        };

        if config.database_path.is_some() && config.admin_password.is_none() {
            return Err(Error::Config(
                "DRINKS_ADMIN_PASSWORD is required when DRINKS_DATABASE is set".to_string(),
            ));
        }

        Ok(config)
    }

    /// The service the views should talk to: the embedded database when a
    /// path is configured, the REST service otherwise.
    pub fn connect(&self) -> Result<SharedService> {
        match (&self.database_path, &self.admin_password) {
            (Some(path), Some(password)) => {
                info!(path = %path.display(), "using embedded database");
                Ok(Arc::new(LocalService::open(path, password.clone())?))
            }
            _ => {
                info!(url = %self.api_url, "using REST service");
                Ok(Arc::new(HttpService::new(&self.api_url)?))
            }
        }
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            Error::Config(format!("{key}: {e}"))
        })
}

fn seconds<F>(lookup: &F, key: &str, default: &str) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = try_load(lookup, key, default)?;
    if secs == 0 {
        warn!("{key} must be at least one second");
        return Err(Error::Config(format!("{key} must be at least one second")));
    }
    Ok(Duration::from_secs(secs))
}
