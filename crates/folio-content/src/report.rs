//! Load diagnostics.
//!
//! The loader never aborts a build over a bad content file; it records what
//! it skipped into a [`LoadReport`] and keeps going. Each entry is mirrored
//! through `tracing::warn!` for operators watching the build log.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a content file (or one aspect of it) was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The file could not be read at all.
    Unreadable(String),

    /// The file is not well-formed XML.
    Unparseable(String),

    /// The root element is not one the collection accepts.
    UnexpectedRoot(String),

    /// The metadata block is missing an id.
    MissingId,

    /// A post without a `<date>` in its metadata.
    MissingDate,

    /// A post date that is not `YYYY-MM-DD`.
    InvalidDate(String),

    /// A page id that was already taken; the later file replaced the earlier.
    DuplicateId(String),
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Unreadable(err) => write!(f, "unreadable: {err}"),
            DiagnosticKind::Unparseable(err) => write!(f, "not well-formed XML: {err}"),
            DiagnosticKind::UnexpectedRoot(root) => {
                write!(f, "unexpected root element <{root}>")
            }
            DiagnosticKind::MissingId => f.write_str("metadata has no id"),
            DiagnosticKind::MissingDate => f.write_str("post metadata has no date"),
            DiagnosticKind::InvalidDate(raw) => {
                write!(f, "post date {raw:?} is not YYYY-MM-DD")
            }
            DiagnosticKind::DuplicateId(id) => {
                write!(f, "duplicate page id {id:?}, replacing the earlier page")
            }
        }
    }
}

/// One skipped or downgraded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.kind)
    }
}

/// Accumulated diagnostics for one load pass.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    entries: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, path: &Path, kind: DiagnosticKind) {
        let diagnostic = Diagnostic {
            path: path.to_path_buf(),
            kind,
        };
        tracing::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_entries_in_order() {
        let mut report = LoadReport::new();
        report.record(Path::new("a.xml"), DiagnosticKind::MissingId);
        report.record(
            Path::new("b.xml"),
            DiagnosticKind::DuplicateId("about".into()),
        );

        assert_eq!(report.len(), 2);
        assert_eq!(report.entries()[0].path, PathBuf::from("a.xml"));
        assert!(report.entries()[1].to_string().contains("duplicate page id"));
    }
}
