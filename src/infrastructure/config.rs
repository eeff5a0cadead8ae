use serde::{Deserialize, Serialize};

/// Dashboard color theme. Passed explicitly into every chart build so
/// there is no library-wide mutable settings object. Serialized alongside
/// the chart specs so the page styles itself from the same palette.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub highlight: String,
    pub primary: String,
    pub accent1: String,
    pub accent2: String,
    pub accent3: String,
    pub state_unavailable: String,
    pub state_degraded: String,
    pub state_available: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#0F000A".to_string(),
            highlight: "#F3F2FF".to_string(),
            primary: "#FF5053".to_string(),
            accent1: "#B2AAFF".to_string(),
            accent2: "#6A5FDB".to_string(),
            accent3: "#261A66".to_string(),
            state_unavailable: "#FF5053".to_string(),
            state_degraded: "#FFEB50".to_string(),
            state_available: "#5FDD6E".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub snapshot: SnapshotSettings,
    pub forms: Vec<FormConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SnapshotSettings {
    pub path: String,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            path: "data/chart_data.json".to_string(),
        }
    }
}

/// One dashboard form, as served by the page endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    pub name: String,
    /// Cleared to defaults on back/forward navigation when set.
    #[serde(default)]
    pub reset_on_navigation: bool,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FieldConfig {
    pub name: String,
    /// Session-store key the field value is persisted under, if any.
    pub sync_key: Option<String>,
    #[serde(default)]
    pub default: String,
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_theme_config() -> anyhow::Result<ThemeConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/theme").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_state_colors_distinct() {
        let theme = ThemeConfig::default();
        assert_ne!(theme.state_unavailable, theme.state_degraded);
        assert_ne!(theme.state_degraded, theme.state_available);
        assert_ne!(theme.state_unavailable, theme.state_available);
    }

    #[test]
    fn test_default_service_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.listen, "0.0.0.0:8080");
        assert_eq!(config.snapshot.path, "data/chart_data.json");
        assert!(config.forms.is_empty());
    }
}
