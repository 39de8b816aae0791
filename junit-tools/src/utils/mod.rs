use clap::ArgMatches;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use crate::command::Command;
use crate::commands::{self, APP_VERSION, ERROR_STATUS_CODE};
use crate::report::Result;
use crate::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};

pub mod writer;

pub fn get_report_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(commands::summary::Summary::new()),
        Box::new(commands::trim::Trim::new()),
    ]
}

/// Logs to stderr at `warn` unless `RUST_LOG` asks for more, so the CSV on
/// stdout is never interleaved with log lines.
pub fn init_logging() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;
    Ok(())
}

/// Runs `command`, reporting any error on the writer's error stream, and
/// returns the process exit code.
pub fn run_command(command: &dyn Command, args: &ArgMatches, writer: &mut Writer) -> i32 {
    match command.execute(args, writer) {
        Err(e) => {
            if let Err(io) = writer.write_err(format!("Error occurred {e}")) {
                error!("failed to write to stderr {io}");
            }
            ERROR_STATUS_CODE
        }
        Ok(code) => code,
    }
}

/// Entry point for the single-purpose binaries: the command's arguments are
/// the top-level arguments of the program.
pub fn run_standalone(bin_name: &'static str, command: &dyn Command) -> i32 {
    let args = command
        .command()
        .name(bin_name)
        .version(APP_VERSION)
        .get_matches();
    let mut writer = Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));
    run_command(command, &args, &mut writer)
}
