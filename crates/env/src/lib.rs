use std::{env::var, sync::Arc};

use dotenv::dotenv;
use log::info;

const DEFAULT_RUST_LOG: &str = "info";
const DEFAULT_GYM_NAME: &str = "gym-roster";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    rust_log: String,
    gym_name: String,
}

impl Env {
    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    pub fn gym_name(&self) -> &str {
        &self.0.gym_name
    }

    /// Reads `.env` if there is one, then the process environment.
    /// Missing variables fall back to defaults.
    pub fn load() -> Env {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }
        Env::from_lookup(|key| var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Env {
        Env(Arc::new(EnvInner {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_owned()),
            gym_name: lookup("GYM_NAME").unwrap_or_else(|| DEFAULT_GYM_NAME.to_owned()),
        }))
    }
}
