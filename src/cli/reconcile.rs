// SPDX-License-Identifier: Apache-2.0

use netsetup::SetupReport;
use uuid::Uuid;

use crate::{
    config::Config,
    error::{CliError, EX_DATAERR},
    state::{desired_from_file, inventory_from_file},
};

pub(crate) fn reconcile(
    matches: &clap::ArgMatches,
    config: &Config,
) -> Result<String, CliError> {
    let inventory = inventory_from_file(config.inventory_path(matches)?)?;
    let host_id =
        Uuid::parse_str(matches.value_of("HOST").unwrap_or_default())?;
    let cluster_id = match matches.value_of("CLUSTER") {
        Some(c) => Uuid::parse_str(c)?,
        None => inventory.cluster_of(&host_id)?,
    };
    let desired =
        desired_from_file(matches.value_of("DESIRED_FILE").unwrap_or("-"))?;

    let report = desired.reconcile(&inventory, &host_id, &cluster_id)?;
    let output = format_report(&report, config.use_json(matches))?;
    if report.is_valid() {
        Ok(output)
    } else {
        for violation in report.violations() {
            log::error!("{violation}");
        }
        Err(CliError {
            code: EX_DATAERR,
            error_msg: output,
        })
    }
}

fn format_report(
    report: &SetupReport,
    json: bool,
) -> Result<String, CliError> {
    Ok(if json {
        serde_json::to_string_pretty(report)?
    } else {
        serde_yaml::to_string(report)?
    })
}
