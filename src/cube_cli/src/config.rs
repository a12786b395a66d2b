use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` file, in TOML format. Every field is
/// optional and command line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Number of quarter turns in a generated scramble.
    pub scramble_length: usize,
    /// Seed for scramble generation. Unseeded scrambles differ between runs.
    pub seed: Option<u64>,
    /// Whether to paint the net with terminal colors.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            scramble_length: 25,
            seed: None,
            color: true,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> color_eyre::Result<CliConfig> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;

        toml::from_str::<CliConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::CliConfig;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(toml::from_str::<CliConfig>("").unwrap(), CliConfig::default());
    }

    #[test]
    fn reads_every_field() {
        let config = toml::from_str::<CliConfig>(
            "scramble_length = 40
seed = 7
color = false
",
        )
        .unwrap();

        assert_eq!(
            config,
            CliConfig {
                scramble_length: 40,
                seed: Some(7),
                color: false,
            }
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<CliConfig>("size = 4").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(CliConfig::load("no/such/cube.toml".as_ref()).is_err());
    }
}
