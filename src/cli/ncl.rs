// SPDX-License-Identifier: Apache-2.0

mod config;
mod error;
mod query;
mod reconcile;
mod state;

use env_logger::Builder;
use log::LevelFilter;

use crate::config::Config;
use crate::error::{CliError, EX_DATAERR};

const APP_NAME: &str = "netsetupctl";

const SUB_CMD_RECONCILE: &str = "reconcile";
const SUB_CMD_SHOW: &str = "show";
const SUB_CMD_VERSION: &str = "version";

const EXIT_FAILURE: i32 = 1;

fn main() {
    let matches = clap::Command::new(APP_NAME)
        .version(clap::crate_version!())
        .about("Validate host network setup against cluster networks")
        .subcommand_required(true)
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Set verbose level")
                .global(true),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("CONFIG")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value(Config::DEFAULT_CONFIG_PATH)
                .help("Configuration file")
                .global(true),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_RECONCILE)
                .about(
                    "Validate desired interfaces of host and show the \
                    required network and bond changes",
                )
                .arg(
                    clap::Arg::new("DESIRED_FILE")
                        .required(false)
                        .index(1)
                        .default_value("-")
                        .help("Desired interfaces file, '-' for stdin"),
                )
                .arg(
                    clap::Arg::new("HOST")
                        .long("host")
                        .required(true)
                        .takes_value(true)
                        .help("UUID of the host"),
                )
                .arg(
                    clap::Arg::new("CLUSTER")
                        .long("cluster")
                        .takes_value(true)
                        .help(
                            "UUID of the cluster, default to the cluster \
                            of host in inventory",
                        ),
                )
                .arg(
                    clap::Arg::new("INVENTORY")
                        .long("inventory")
                        .short('i')
                        .takes_value(true)
                        .help("Inventory file holding hosts and clusters"),
                )
                .arg(
                    clap::Arg::new("JSON")
                        .long("json")
                        .takes_value(false)
                        .help("Show result in json format"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_SHOW)
                .about("Show current interfaces of host")
                .arg(
                    clap::Arg::new("IFNAME")
                        .index(1)
                        .help("Show specific interface only"),
                )
                .arg(
                    clap::Arg::new("HOST")
                        .long("host")
                        .required(true)
                        .takes_value(true)
                        .help("UUID of the host"),
                )
                .arg(
                    clap::Arg::new("INVENTORY")
                        .long("inventory")
                        .short('i')
                        .takes_value(true)
                        .help("Inventory file holding hosts and clusters"),
                )
                .arg(
                    clap::Arg::new("JSON")
                        .long("json")
                        .takes_value(false)
                        .help("Show state in json format"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_VERSION).about("Show version"),
        )
        .get_matches();

    let (log_module_filters, log_level) =
        match matches.occurrences_of("verbose") {
            0 => (vec!["netsetup", "netsetupctl"], LevelFilter::Info),
            1 => (vec!["netsetup", "netsetupctl"], LevelFilter::Debug),
            _ => (vec![""], LevelFilter::Debug),
        };

    if !matches.is_present("quiet") {
        let mut log_builder = Builder::new();
        for log_module_filter in log_module_filters {
            if !log_module_filter.is_empty() {
                log_builder.filter(Some(log_module_filter), log_level);
            } else {
                log_builder.filter(None, log_level);
            }
        }
        log_builder.init();
    }

    let config = match Config::load(
        matches
            .value_of("CONFIG")
            .unwrap_or(Config::DEFAULT_CONFIG_PATH),
    ) {
        Ok(c) => c,
        Err(e) => {
            print_error_and_exit(e, EX_DATAERR);
            return;
        }
    };

    if let Some(matches) = matches.subcommand_matches(SUB_CMD_RECONCILE) {
        print_result_and_exit(
            reconcile::reconcile(matches, &config),
            EXIT_FAILURE,
        );
    } else if let Some(matches) = matches.subcommand_matches(SUB_CMD_SHOW) {
        print_result_and_exit(query::show(matches, &config), EXIT_FAILURE);
    } else if matches.subcommand_matches(SUB_CMD_VERSION).is_some() {
        print_string_and_exit(format!(
            "{} {}",
            APP_NAME,
            clap::crate_version!()
        ));
    }
}

// The error code of CliError is used unless it is the generic one.
fn print_result_and_exit(result: Result<String, CliError>, errno: i32) {
    match result {
        Ok(s) => print_string_and_exit(s),
        Err(e) => {
            let errno = if e.code != error::DEFAULT_ERROR_CODE {
                e.code
            } else {
                errno
            };
            print_error_and_exit(e, errno)
        }
    }
}

fn print_error_and_exit(e: CliError, errno: i32) {
    eprintln!("{e}");
    std::process::exit(errno);
}

fn print_string_and_exit(s: String) {
    println!("{s}");
    std::process::exit(0);
}
