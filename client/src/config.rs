use std::path::Path;

use serde::{Deserialize, Serialize};
pub(crate) use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{BotType, Player};

pub const CONFIG_FILE: &str = "tictactoe.yaml";
pub const DEFAULT_BOT_DELAY_MS: u64 = 500;
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

const CONFIG_HEADER: &str = "tictactoe settings\n\
player_mark: X or O, difficulty: random or minimax\n\
remove a line to be asked at startup";

fn config_serializer() -> YamlConfigSerializer {
    YamlConfigSerializer::with_header(CONFIG_HEADER)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::new(FileContentConfigProvider::new(path), config_serializer())
}

/// Saved preferences. Anything left unset is asked for at startup.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub player_mark: Option<Player>,
    pub difficulty: Option<BotType>,
    pub human_first: Option<bool>,
    pub bot_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_mark: None,
            difficulty: None,
            human_first: None,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            seed: None,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::ConfigSerializer;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ClientConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_long_delay_is_rejected() {
        let config = ClientConfig {
            bot_delay_ms: MAX_BOT_DELAY_MS + 1,
            ..ClientConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_fields() {
        let yaml = "player_mark: O\ndifficulty: minimax\nhuman_first: false\nseed: 9\n";

        let config: ClientConfig = YamlConfigSerializer::new().deserialize(yaml).unwrap();

        assert_eq!(config.player_mark, Some(Player::O));
        assert_eq!(config.difficulty, Some(BotType::Minimax));
        assert_eq!(config.human_first, Some(false));
        assert_eq!(config.bot_delay_ms, DEFAULT_BOT_DELAY_MS);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_yaml_round_trip_keeps_unset_fields_unset() {
        let serializer = config_serializer();
        let config = ClientConfig {
            difficulty: Some(BotType::Random),
            ..ClientConfig::default()
        };

        let yaml = serializer.serialize(&config).unwrap();
        let back: ClientConfig = serializer.deserialize(&yaml).unwrap();

        assert_eq!(back, config);
        assert!(yaml.starts_with("# tictactoe settings\n"));
    }

    #[test]
    fn test_saved_file_reloads_through_manager() {
        let path = std::env::temp_dir().join(format!(
            "tictactoe-client-config-{}.yaml",
            std::process::id()
        ));
        let config = ClientConfig {
            player_mark: Some(Player::X),
            seed: Some(7),
            ..ClientConfig::default()
        };

        get_config_manager(&path).set_config(&config).unwrap();
        let loaded = get_config_manager(&path).get_config();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, Ok(config));
    }
}
