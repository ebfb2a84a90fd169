// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) inventory: InventoryConfig,
    #[serde(default)]
    pub(crate) output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InventoryConfig {
    #[serde(default)]
    pub(crate) path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OutputConfig {
    #[serde(default)]
    pub(crate) json: bool,
}

impl Config {
    pub(crate) const DEFAULT_CONFIG_PATH: &'static str =
        "/etc/netsetup/netsetup.conf";

    pub(crate) fn load(path: &str) -> Result<Self, CliError> {
        let path = std::path::Path::new(path);
        if !path.exists() {
            return Ok(Config::default());
        }
        let mut fd = std::fs::File::open(path)?;
        let mut content = String::new();
        fd.read_to_string(&mut content)?;
        Self::from_toml(&content).map_err(|e| {
            CliError::from(format!(
                "Failed to read configuration from {}: {}",
                path.display(),
                e.error_msg
            ))
        })
    }

    pub(crate) fn from_toml(content: &str) -> Result<Self, CliError> {
        match toml::from_str::<Config>(content) {
            Ok(c) => {
                log::info!("Configuration loaded:\n{content}");
                Ok(c)
            }
            Err(e) => Err(CliError::from(e.to_string())),
        }
    }

    // Command line argument wins over configuration file.
    pub(crate) fn inventory_path<'a>(
        &'a self,
        matches: &'a clap::ArgMatches,
    ) -> Result<&'a str, CliError> {
        matches
            .value_of("INVENTORY")
            .or(self.inventory.path.as_deref())
            .ok_or_else(|| {
                CliError::from(
                    "No inventory file defined in command line or \
                    configuration",
                )
            })
    }

    pub(crate) fn use_json(&self, matches: &clap::ArgMatches) -> bool {
        matches.is_present("JSON") || self.output.json
    }
}
