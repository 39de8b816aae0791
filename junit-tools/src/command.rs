use clap::ArgMatches;

use crate::report::Result;
use crate::utils::writer::Writer;

pub trait Command {
    fn name(&self) -> &'static str;
    fn command(&self) -> clap::Command;
    fn execute(&self, args: &ArgMatches, writer: &mut Writer) -> Result<i32>;
}
