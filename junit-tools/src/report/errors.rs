use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error parsing XML test report {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("Error writing CSV record {0}")]
    CsvError(#[from] csv::Error),
    #[error("Malformed test report: {0}")]
    MalformedReport(String),
    #[error("Element `{element}` is missing the required attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("Test case `{name}` has a non-numeric time `{value}`")]
    InvalidTime { name: String, value: String },
    #[error("The path `{0}` does not exist")]
    FileNotFoundError(String),
    #[error("Could not initialize logging {0}")]
    LoggerError(#[from] log::SetLoggerError),
}
