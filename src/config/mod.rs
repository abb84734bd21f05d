use anyhow::Result;
use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    /// Artificial delay applied at the HTTP boundary before mood analysis
    /// and recommendation responses, in milliseconds. The storefront UI uses
    /// this to exercise its loading states; the engine itself never waits.
    pub simulated_latency_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            simulated_latency_ms: env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("SIMULATED_LATENCY_MS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.simulated_latency_ms, 0);
    }
}
