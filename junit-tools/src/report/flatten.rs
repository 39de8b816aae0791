use std::io::Write;

use log::trace;

use crate::report::errors::Error;
use crate::report::model::TestReport;
use crate::report::Result;

/// Leading field of every record, lets ingesters pick these rows out of mixed logs.
pub const RECORD_TAG: &str = "TESTRESULT";
pub const UNKNOWN: &str = "unknown";

pub const PROJECT_NAME_VAR: &str = "CI_PROJECT_NAME";
pub const COMMIT_REF_NAME_VAR: &str = "CI_COMMIT_REF_NAME";
pub const JOB_URL_VAR: &str = "CI_JOB_URL";

/// Identifies the CI job a report came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiMetadata {
    pub project: String,
    pub branch: String,
    pub job_url: String,
}

impl Default for CiMetadata {
    fn default() -> Self {
        CiMetadata {
            project: String::from(UNKNOWN),
            branch: String::from(UNKNOWN),
            job_url: String::from(UNKNOWN),
        }
    }
}

impl CiMetadata {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Resolves each field through `lookup`. Unset variables fall back to
    /// `unknown`; a variable set to an empty string is kept as is.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str| lookup(key).unwrap_or_else(|| String::from(UNKNOWN));
        CiMetadata {
            project: resolve(PROJECT_NAME_VAR),
            branch: resolve(COMMIT_REF_NAME_VAR),
            job_url: resolve(JOB_URL_VAR),
        }
    }
}

pub fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

/// Writes one record per test case of `report`, in document order, and
/// returns how many were written.
pub fn write_records<W: Write>(
    report: &TestReport,
    metadata: &CiMetadata,
    writer: &mut csv::Writer<W>,
) -> Result<usize> {
    if report.test_cases.is_empty() {
        return Ok(0);
    }

    let suite = report
        .name
        .as_deref()
        .ok_or_else(|| Error::MissingAttribute {
            element: String::from("root"),
            attribute: "name",
        })?;

    for test_case in &report.test_cases {
        let time = format_time(test_case.time);
        let status = test_case.status().to_string();
        trace!("{} {} {}", test_case.name, time, status);
        writer.write_record([
            RECORD_TAG,
            metadata.project.as_str(),
            metadata.branch.as_str(),
            suite,
            test_case.name.as_str(),
            time.as_str(),
            status.as_str(),
            metadata.job_url.as_str(),
        ])?;
    }

    Ok(report.test_cases.len())
}

/// Shortest round-trip digits, laid out the way metrics ingesters already
/// expect: fixed notation with a trailing `.0` for integral values when the
/// decimal exponent is in `-4..16`, otherwise `1.5e-05` / `1e+16` style with a
/// signed, at least two digit exponent.
fn format_time(time: f64) -> String {
    if time.is_nan() {
        return String::from("nan");
    }
    if time.is_infinite() {
        return String::from(if time > 0.0 { "inf" } else { "-inf" });
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. `-1.25e-7`
    let scientific = format!("{time:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs());
    }

    let digits = mantissa.replace('.', "");
    let fixed = if exponent < 0 {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    } else {
        let integral = exponent as usize + 1;
        if digits.len() <= integral {
            format!("{}{}.0", digits, "0".repeat(integral - digits.len()))
        } else {
            format!("{}.{}", &digits[..integral], &digits[integral..])
        }
    };
    format!("{sign}{fixed}")
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod flatten_tests;
