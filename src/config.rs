//! Process configuration, resolved once from the environment.
//!
//! All knobs are `STOCKROOM_`-prefixed variables; a `.env` file is honored
//! when the binaries load one before touching [`CONFIG`].

use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Store location, e.g. `sqlite:inventory.db`.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_database_url() -> String {
    "sqlite:inventory.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::prefixed("STOCKROOM_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::from_env().expect("invalid STOCKROOM_* environment configuration")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_without_environment() {
        let cfg: AppConfig = Figment::new()
            .merge(Env::prefixed("STOCKROOM_TEST_NO_SUCH_PREFIX_"))
            .extract()
            .unwrap();
        assert_eq!(cfg.database_url, "sqlite:inventory.db");
        assert_eq!(cfg.loglevel, "info");
    }
}
