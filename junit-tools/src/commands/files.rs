use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches};

use crate::commands::FILES;
use crate::report::errors::Error;
use crate::report::Result;

pub(crate) fn files_arg() -> Arg {
    Arg::new(FILES)
        .value_name("FILE")
        .help("JUnit XML report files, processed in the order given")
        .action(ArgAction::Append)
        .num_args(1..)
        .required(false)
}

pub(crate) fn files_from(args: &ArgMatches) -> Vec<&String> {
    args.get_many::<String>(FILES)
        .map(|files| files.collect())
        .unwrap_or_default()
}

pub(crate) fn read_file_content(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::FileNotFoundError(path.display().to_string()));
    }
    let mut file_content = Vec::new();
    let mut buf_reader = BufReader::new(File::open(path)?);
    buf_reader.read_to_end(&mut file_content)?;
    Ok(file_content)
}

/// Truncates and rewrites `path` in place. Nothing guards against a partial
/// write if the process dies midway.
pub(crate) fn write_file_content(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.flush()?;
    Ok(())
}
