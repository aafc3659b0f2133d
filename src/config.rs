// Runtime configuration read from the environment (and `.env` when present)

/// Settings for a console session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name of the league created at startup
    pub league_name: String,
    /// Country of the league created at startup
    pub league_country: String,
}

impl AppConfig {
    pub const DEFAULT_LEAGUE_NAME: &'static str = "Premier League";
    pub const DEFAULT_LEAGUE_COUNTRY: &'static str = "England";

    /// Loads `.env` if present, then reads `LEAGUE_NAME` and `LEAGUE_COUNTRY`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys fall back
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| {
                    tracing::warn!("{} not set, using default", key);
                    default.to_string()
                })
        };

        Self {
            league_name: read("LEAGUE_NAME", Self::DEFAULT_LEAGUE_NAME),
            league_country: read("LEAGUE_COUNTRY", Self::DEFAULT_LEAGUE_COUNTRY),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_keys_use_defaults() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.league_name, "Premier League");
        assert_eq!(config.league_country, "England");
    }

    #[test]
    fn set_keys_override_defaults() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("LEAGUE_NAME", "La Liga"), ("LEAGUE_COUNTRY", "Spain")]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.league_name, "La Liga");
        assert_eq!(config.league_country, "Spain");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = AppConfig::from_lookup(|key| (key == "LEAGUE_NAME").then(|| "  ".to_string()));
        assert_eq!(config.league_name, "Premier League");
    }
}
