use std::ops::Range;

use crate::report::xml::{Node, ReportReader, SYSTEM_OUT};
use crate::report::Result;

const EMPTY_SYSTEM_OUT: &[u8] = b"<system-out/>";

/// Empties the first `system-out` element directly under the root of a report.
///
/// Returns `Ok(None)` when the root has no such child, leaving the caller free
/// to skip rewriting the file. Otherwise returns the full document with the
/// element replaced by `<system-out/>`: its text, children and attributes are
/// dropped. Every byte outside the element is carried over unchanged. The
/// whole document is validated before anything is returned, so malformed
/// input never produces output.
pub fn trim_system_out(content: &[u8]) -> Result<Option<Vec<u8>>> {
    let mut reader = ReportReader::new(content);
    let mut found: Option<Range<usize>> = None;
    let mut open_start: Option<usize> = None;

    while let Some(located) = reader.next_node()? {
        match located.node {
            Node::Open {
                element,
                depth: 1,
                empty,
                start,
            } if found.is_none()
                && open_start.is_none()
                && element.name().as_ref() == SYSTEM_OUT =>
            {
                if empty {
                    found = Some(start..located.end);
                } else {
                    open_start = Some(start);
                }
            }
            Node::Close { depth: 1 } => {
                if let Some(start) = open_start.take() {
                    found = Some(start..located.end);
                }
            }
            _ => {}
        }
    }

    Ok(found.map(|span| {
        let mut trimmed =
            Vec::with_capacity(content.len() - span.len() + EMPTY_SYSTEM_OUT.len());
        trimmed.extend_from_slice(&content[..span.start]);
        trimmed.extend_from_slice(EMPTY_SYSTEM_OUT);
        trimmed.extend_from_slice(&content[span.end..]);
        trimmed
    }))
}

#[cfg(test)]
#[path = "trim_tests.rs"]
mod trim_tests;
