// SPDX-License-Identifier: Apache-2.0

use netsetup::TopologyStore;
use uuid::Uuid;

use crate::{config::Config, error::CliError, state::inventory_from_file};

// Interfaces sorted by name
pub(crate) fn show(
    matches: &clap::ArgMatches,
    config: &Config,
) -> Result<String, CliError> {
    let inventory = inventory_from_file(config.inventory_path(matches)?)?;
    let host_id =
        Uuid::parse_str(matches.value_of("HOST").unwrap_or_default())?;

    let mut ifaces = inventory.host_interfaces(&host_id)?;
    if let Some(ifname) = matches.value_of("IFNAME") {
        ifaces.retain(|iface| iface.name() == ifname);
        if ifaces.is_empty() {
            return Err(CliError::from(format!(
                "Interface {ifname} not found on host {host_id}"
            )));
        }
    }
    ifaces.sort_unstable_by(|a, b| a.name().cmp(b.name()));

    Ok(if config.use_json(matches) {
        serde_json::to_string_pretty(&ifaces)?
    } else {
        serde_yaml::to_string(&ifaces)?
    })
}
