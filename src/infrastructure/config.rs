use anyhow::Context;
use serde::Deserialize;

const DEFAULT_NOTE: &str = "This dashboard offers insights into Premier League standings and top scorers. It features visualizations of team performance, win/loss distributions, and detailed top scorer stats to help users easily grasp the league's dynamics.";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub token: String,
    #[serde(default = "default_competition")]
    pub competition: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardSettings {
    pub title: String,
    pub standings_heading: String,
    pub note_heading: String,
    pub note: String,
}

fn default_base_url() -> String {
    "https://api.football-data.org/v4".to_string()
}

fn default_competition() -> String {
    "PL".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Premier League Dashboard".to_string(),
            standings_heading: "Premier League Standings".to_string(),
            note_heading: "Purpose".to_string(),
            note: DEFAULT_NOTE.to_string(),
        }
    }
}

/// Loads `config/dashboard.*` (optional) overlaid with `DASHBOARD__*` environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"));

    build_app_config(builder)
}

fn build_app_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<AppConfig> {
    let settings = builder.build()?;
    let app_config: AppConfig = settings
        .try_deserialize()
        .context("Invalid dashboard configuration (is DASHBOARD__API__TOKEN set?)")?;

    if app_config.api.token.trim().is_empty() {
        anyhow::bail!("api.token must not be empty");
    }

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Environment, File, FileFormat};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("DASHBOARD")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn test_defaults_with_token_only() {
        let builder = config::Config::builder().add_source(env(&[("DASHBOARD__API__TOKEN", "abc123")]));

        let cfg = build_app_config(builder).unwrap();
        assert_eq!(cfg.api.token, "abc123");
        assert_eq!(cfg.api.base_url, "https://api.football-data.org/v4");
        assert_eq!(cfg.api.competition, "PL");
        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
        assert_eq!(cfg.dashboard.title, "Premier League Dashboard");
        assert_eq!(cfg.dashboard.note_heading, "Purpose");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = r#"
            [api]
            token = "from-file"
            competition = "BL1"

            [dashboard]
            title = "Bundesliga Dashboard"
        "#;
        let builder = config::Config::builder()
            .add_source(File::from_str(file, FileFormat::Toml))
            .add_source(env(&[("DASHBOARD__API__TOKEN", "from-env")]));

        let cfg = build_app_config(builder).unwrap();
        assert_eq!(cfg.api.token, "from-env");
        assert_eq!(cfg.api.competition, "BL1");
        assert_eq!(cfg.dashboard.title, "Bundesliga Dashboard");
        // Unset fields in a partial section keep their defaults
        assert_eq!(cfg.dashboard.standings_heading, "Premier League Standings");
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let builder = config::Config::builder().add_source(File::from_str(
            "[server]\nbind = \"127.0.0.1:9000\"",
            FileFormat::Toml,
        ));
        assert!(build_app_config(builder).is_err());

        let builder = config::Config::builder().add_source(env(&[("DASHBOARD__API__TOKEN", "  ")]));
        assert!(build_app_config(builder).is_err());
    }
}
