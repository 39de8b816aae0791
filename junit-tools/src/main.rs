// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::process::exit;

use junit_tools::commands::{APP_NAME, APP_VERSION};
use junit_tools::report::errors::Error;
use junit_tools::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};
use junit_tools::utils::{get_report_commands, init_logging, run_command};

fn main() -> Result<(), Error> {
    init_logging()?;

    let mut app = clap::Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(
            r#"
  Post-processes JUnit XML test reports produced by CI jobs.
  `summary` flattens every test case into a CSV record for metrics ingestion,
  `trim` empties the report-level captured output to shrink stored reports."#,
        )
        .arg_required_else_help(true);

    let commands = get_report_commands();
    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );

    for each in &commands {
        app = app.subcommand(each.command());
    }

    let help = app.render_usage();
    let app = app.get_matches();

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                let mut writer = Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));
                exit(run_command(*command, value, &mut writer));
            } else {
                println!("{help}");
            }
        }
        None => {
            println!("{help}");
        }
    }

    Ok(())
}
