use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::command::Command;
use crate::commands::files::{files_arg, files_from, read_file_content};
use crate::commands::{SUCCESS_STATUS_CODE, SUMMARY};
use crate::report::flatten::{csv_writer, write_records, CiMetadata};
use crate::report::model::TestReport;
use crate::report::Result;
use crate::utils::writer::Writer;

/// Flattens every test case of the given reports into one CSV record on stdout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    metadata: Option<CiMetadata>,
}

impl Summary {
    pub fn new() -> Self {
        Summary { metadata: None }
    }

    /// Uses `metadata` instead of reading the CI variables from the environment.
    pub fn with_metadata(metadata: CiMetadata) -> Self {
        Summary {
            metadata: Some(metadata),
        }
    }
}

impl Command for Summary {
    fn name(&self) -> &'static str {
        SUMMARY
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(SUMMARY)
            .about(
                "Prints one CSV record per test case found in the given JUnit XML reports. \
                 Project, branch and job URL columns come from CI_PROJECT_NAME, \
                 CI_COMMIT_REF_NAME and CI_JOB_URL.",
            )
            .arg(files_arg())
    }

    fn execute(&self, args: &ArgMatches, writer: &mut Writer) -> Result<i32> {
        let metadata = match &self.metadata {
            Some(metadata) => metadata.clone(),
            None => CiMetadata::from_env(),
        };
        debug!("CI metadata {:?}", metadata);

        for file in files_from(args) {
            if let Err(e) = summarize(Path::new(file), &metadata, writer) {
                writer.write_err(format!("Failed to summarize test report {file}"))?;
                return Err(e);
            }
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}

fn summarize(path: &Path, metadata: &CiMetadata, writer: &mut Writer) -> Result<usize> {
    let content = read_file_content(path)?;
    let report = TestReport::parse(&content)?;
    debug!(
        "{} has {} test case(s)",
        path.display(),
        report.test_cases.len()
    );

    let mut records = csv_writer(writer);
    let written = write_records(&report, metadata, &mut records)?;
    records.flush()?;
    info!("Wrote {} record(s) for {}", written, path.display());
    Ok(written)
}
