// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use netsetup::{DesiredTopology, Inventory};

use crate::error::CliError;

fn read_content(file_path: &str) -> Result<String, CliError> {
    let mut content = String::new();
    if file_path == "-" {
        std::io::stdin().read_to_string(&mut content)?;
    } else {
        std::fs::File::open(file_path)?.read_to_string(&mut content)?;
    };
    // Replace non-breaking space '\u{A0}'  to normal space
    Ok(content.replace('\u{A0}', " "))
}

fn is_json_file(file_path: &str) -> bool {
    file_path.ends_with(".json")
}

pub(crate) fn desired_from_file(
    file_path: &str,
) -> Result<DesiredTopology, CliError> {
    let content = read_content(file_path)?;
    Ok(if is_json_file(file_path) {
        DesiredTopology::new_from_json(&content)?
    } else {
        DesiredTopology::new_from_yaml(&content)?
    })
}

pub(crate) fn inventory_from_file(
    file_path: &str,
) -> Result<Inventory, CliError> {
    let content = read_content(file_path)?;
    log::debug!("Loading inventory from {file_path}");
    Ok(if is_json_file(file_path) {
        Inventory::new_from_json(&content)?
    } else {
        Inventory::new_from_yaml(&content)?
    })
}
