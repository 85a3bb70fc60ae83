use std::path::Path;

use crate::error::ConfigError;

/// Who controls each side. The first-named side plays Red and moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsAgent,
    AgentVsHuman,
    HumanVsHuman,
    AgentVsAgent,
}

impl GameMode {
    /// Whether the first and second player are driven by the agent.
    pub fn agent_sides(self) -> (bool, bool) {
        match self {
            GameMode::HumanVsAgent => (false, true),
            GameMode::AgentVsHuman => (true, false),
            GameMode::HumanVsHuman => (false, false),
            GameMode::AgentVsAgent => (true, true),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_name: String,
    pub second_name: String,
    pub mode: GameMode,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_name: "Player 1".to_string(),
            second_name: "Player 2".to_string(),
            mode: GameMode::HumanVsAgent,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Seed for the tie-break RNG; unseeded agents draw from the OS.
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.first_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first_name must not be empty".into(),
            ));
        }
        if self.players.second_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second_name must not be empty".into(),
            ));
        }
        if self.players.first_name == self.players.second_name {
            return Err(ConfigError::Validation(
                "players.first_name and players.second_name must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
