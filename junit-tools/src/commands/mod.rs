pub(crate) mod files;
pub mod summary;
pub mod trim;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "junit-tools";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const SUMMARY: &str = "summary";
pub const TRIM: &str = "trim";
// Standalone binaries
pub const SUMMARY_BIN: &str = "testsummary";
pub const TRIM_BIN: &str = "testtrim";
// Arguments for summary, trim
pub const FILES: &str = "files";

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = -1;
