use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub location: LocationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub postcode: String,
    pub area: String,
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::with_prefix("SKIPQUOTE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.api.base_url.is_empty() {
        anyhow::bail!("API base URL must not be empty");
    }

    if !cfg.api.base_url.starts_with("http://") && !cfg.api.base_url.starts_with("https://") {
        anyhow::bail!("API base URL must start with http:// or https://");
    }

    if cfg.api.timeout_seconds == 0 {
        anyhow::bail!("API timeout must be greater than zero");
    }

    if cfg.location.postcode.is_empty() {
        anyhow::bail!("Location postcode must not be empty");
    }

    if cfg.location.area.is_empty() {
        anyhow::bail!("Location area must not be empty");
    }

    Ok(())
}
