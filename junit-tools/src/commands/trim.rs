use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::command::Command;
use crate::commands::files::{files_arg, files_from, read_file_content, write_file_content};
use crate::commands::{SUCCESS_STATUS_CODE, TRIM};
use crate::report::trim::trim_system_out;
use crate::report::Result;
use crate::utils::writer::Writer;

/// Empties the root-level `system-out` of the given reports, rewriting them in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Trim {}

#[allow(clippy::new_without_default)]
impl Trim {
    pub fn new() -> Self {
        Trim {}
    }
}

impl Command for Trim {
    fn name(&self) -> &'static str {
        TRIM
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(TRIM)
            .about(
                "Empties the system-out element under the root of each JUnit XML report \
                 and rewrites the file in place. Reports without one are left untouched.",
            )
            .arg(files_arg())
    }

    fn execute(&self, args: &ArgMatches, writer: &mut Writer) -> Result<i32> {
        for file in files_from(args) {
            if let Err(e) = trim(Path::new(file)) {
                writer.write_err(format!("Failed to trim test report {file}"))?;
                return Err(e);
            }
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}

fn trim(path: &Path) -> Result<bool> {
    let content = read_file_content(path)?;
    match trim_system_out(&content)? {
        Some(trimmed) => {
            write_file_content(path, &trimmed)?;
            info!(
                "Trimmed {} from {} to {} bytes",
                path.display(),
                content.len(),
                trimmed.len()
            );
            Ok(true)
        }
        None => {
            debug!("{} has no system-out under its root, leaving it", path.display());
            Ok(false)
        }
    }
}
