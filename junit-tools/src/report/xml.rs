use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::report::errors::Error;
use crate::report::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) const TESTCASE: &[u8] = b"testcase";
pub(crate) const FAILURE: &[u8] = b"failure";
pub(crate) const SYSTEM_OUT: &[u8] = b"system-out";

#[derive(Debug)]
pub(crate) enum Node<'doc> {
    /// A start tag or a self-closing tag. The root element sits at depth 0;
    /// `start` is the offset of the tag's opening `<`.
    Open {
        element: BytesStart<'doc>,
        depth: usize,
        empty: bool,
        start: usize,
    },
    /// The end tag closing the element opened at `depth`.
    Close { depth: usize },
}

/// A node together with the offset just past its closing `>`.
#[derive(Debug)]
pub(crate) struct Located<'doc> {
    pub(crate) node: Node<'doc>,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootState {
    Pending,
    Open,
    Closed,
}

/// Walks a report element by element while enforcing that the document is
/// well formed: exactly one root element, no stray text around it, quoted and
/// unique attributes, decodable text and entities, and every element closed
/// by the time the input runs out. Malformed input surfaces as
/// an error from `next_node` at the point it is detected, so a caller that
/// drains the reader has validated the whole document.
pub(crate) struct ReportReader<'doc> {
    reader: Reader<&'doc [u8]>,
    offset: usize,
    depth: usize,
    root: RootState,
}

impl<'doc> ReportReader<'doc> {
    pub(crate) fn new(content: &'doc [u8]) -> Self {
        let offset = if content.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        let mut reader = Reader::from_reader(&content[offset..]);
        reader.check_end_names(true);
        ReportReader {
            reader,
            offset,
            depth: 0,
            root: RootState::Pending,
        }
    }

    pub(crate) fn next_node(&mut self) -> Result<Option<Located<'doc>>> {
        loop {
            let event = self.reader.read_event()?;
            let end = self.position();
            let node = match event {
                Event::Start(element) => {
                    self.enter()?;
                    check_element(&element)?;
                    let depth = self.depth;
                    self.depth += 1;
                    // `<` + name and attributes + `>`
                    let start = end - (element.len() + 2);
                    Node::Open {
                        element,
                        depth,
                        empty: false,
                        start,
                    }
                }
                Event::Empty(element) => {
                    self.enter()?;
                    check_element(&element)?;
                    if self.depth == 0 {
                        self.root = RootState::Closed;
                    }
                    // `<` + name and attributes + `/>`
                    let start = end - (element.len() + 3);
                    Node::Open {
                        element,
                        depth: self.depth,
                        empty: true,
                        start,
                    }
                }
                Event::End(element) => {
                    self.depth = self.depth.checked_sub(1).ok_or_else(|| {
                        Error::MalformedReport(format!(
                            "unexpected closing tag `{}`",
                            String::from_utf8_lossy(element.name().as_ref())
                        ))
                    })?;
                    if self.depth == 0 {
                        self.root = RootState::Closed;
                    }
                    Node::Close { depth: self.depth }
                }
                Event::Text(text) => {
                    // rejects bare `&`, unknown entities and invalid UTF-8
                    let text = text.unescape()?;
                    if self.depth == 0 && !text.chars().all(|c| c.is_ascii_whitespace()) {
                        return Err(Error::MalformedReport(String::from(
                            "text content outside of the root element",
                        )));
                    }
                    continue;
                }
                Event::CData(cdata) => {
                    if self.depth == 0 {
                        return Err(Error::MalformedReport(String::from(
                            "CDATA section outside of the root element",
                        )));
                    }
                    check_utf8(&cdata, "CDATA section")?;
                    continue;
                }
                Event::Comment(comment) => {
                    check_utf8(&comment, "comment")?;
                    continue;
                }
                Event::Eof => {
                    return match self.root {
                        RootState::Closed => Ok(None),
                        RootState::Pending => Err(Error::MalformedReport(String::from(
                            "document has no root element",
                        ))),
                        RootState::Open => Err(Error::MalformedReport(format!(
                            "document ended with {} unclosed element(s)",
                            self.depth
                        ))),
                    };
                }
                _ => continue,
            };

            return Ok(Some(Located { node, end }));
        }
    }

    fn position(&self) -> usize {
        self.offset + self.reader.buffer_position()
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth == 0 {
            match self.root {
                RootState::Pending => self.root = RootState::Open,
                _ => {
                    return Err(Error::MalformedReport(String::from(
                        "document has more than one root element",
                    )))
                }
            }
        }
        Ok(())
    }
}

/// Every attribute must be quoted, unique, and hold a decodable value.
fn check_element(element: &BytesStart<'_>) -> Result<()> {
    check_utf8(element.name().as_ref(), "element name")?;
    let mut attributes = element.attributes();
    attributes.with_checks(true);
    for attr in attributes {
        let attr = attr.map_err(quick_xml::Error::from)?;
        attr.unescape_value()?;
    }
    Ok(())
}

fn check_utf8(bytes: &[u8], what: &str) -> Result<()> {
    std::str::from_utf8(bytes)
        .map(|_| ())
        .map_err(|e| Error::MalformedReport(format!("{what} is not valid UTF-8: {e}")))
}

/// Reads and unescapes an attribute value, `None` when the attribute is absent.
pub(crate) fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

pub(crate) fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod xml_tests;
