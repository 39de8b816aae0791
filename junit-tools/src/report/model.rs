use std::fmt::Formatter;

use quick_xml::events::BytesStart;

use crate::report::errors::Error;
use crate::report::xml::{attribute, element_name, Node, ReportReader, FAILURE, TESTCASE};
use crate::report::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Success,
    Fail,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Success => f.write_str("SUCCESS"),
            TestStatus::Fail => f.write_str("FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    /// Seconds, `0.0` when the report does not record a duration.
    pub time: f64,
    pub failed: bool,
}

impl TestCase {
    pub fn status(&self) -> TestStatus {
        match self.failed {
            true => TestStatus::Fail,
            false => TestStatus::Success,
        }
    }

    fn from_element(element: &BytesStart<'_>) -> Result<Self> {
        let name = attribute(element, "name")?.ok_or_else(|| Error::MissingAttribute {
            element: element_name(element),
            attribute: "name",
        })?;

        let time = match attribute(element, "time")? {
            Some(value) => match value.trim().parse::<f64>() {
                Ok(time) => time,
                Err(_) => return Err(Error::InvalidTime { name, value }),
            },
            None => 0.0,
        };

        Ok(TestCase {
            name,
            time,
            failed: false,
        })
    }
}

/// A parsed test report: the root element's `name` and every `testcase`
/// found anywhere in the document, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestReport {
    pub name: Option<String>,
    pub test_cases: Vec<TestCase>,
}

impl TestReport {
    pub fn parse(content: &[u8]) -> Result<TestReport> {
        let mut reader = ReportReader::new(content);
        let mut report = TestReport::default();
        // (depth, index into test_cases) for every test case still open
        let mut open: Vec<(usize, usize)> = Vec::new();

        while let Some(located) = reader.next_node()? {
            match located.node {
                Node::Open {
                    element,
                    depth,
                    empty,
                    ..
                } => {
                    if depth == 0 {
                        report.name = attribute(&element, "name")?;
                    }

                    match element.name().as_ref() {
                        TESTCASE => {
                            report.test_cases.push(TestCase::from_element(&element)?);
                            if !empty {
                                open.push((depth, report.test_cases.len() - 1));
                            }
                        }
                        FAILURE => {
                            if let Some(&(case_depth, index)) = open.last() {
                                if case_depth + 1 == depth {
                                    report.test_cases[index].failed = true;
                                }
                            }
                        }
                        _ => {}
                    }
                }
                Node::Close { depth } => {
                    if matches!(open.last(), Some(&(case_depth, _)) if case_depth == depth) {
                        open.pop();
                    }
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
