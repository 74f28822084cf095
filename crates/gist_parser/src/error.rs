use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing a file for an embedded gist section.
///
/// Missing or misordered markers mean "this file is not gistable" and are an
/// expected outcome for most files a scanner visits. Malformed metadata on an
/// otherwise gistable file (`FieldNotFound` for the mandatory description,
/// `BooleanParse` for the public flag) is a real error and must be surfaced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file is not gistable: no start marker found")]
    NoStartMarker,

    #[error("file is not gistable: no end marker found")]
    NoEndMarker,

    #[error("the end marker must come at least one line after the start marker")]
    MarkerOrder,

    /// The requested metadata key never appears inside the marker span.
    #[error("{key} does not exist")]
    FieldNotFound { key: String },

    /// A value that is neither a true nor a false token.
    #[error("could not parse {value:?} as a boolean for key {key}")]
    BooleanParse { key: String, value: String },

    /// Wrapper reported by record assembly when the gistability check fails.
    #[error("could not get gist body: {0}")]
    NotGistable(#[source] Box<ParseError>),
}

impl ParseError {
    /// True for the expected skip-this-file outcomes: missing or misordered
    /// markers, bare or wrapped by record assembly. Read failures and
    /// malformed metadata are not "not gistable" and report as false.
    pub fn is_not_gistable(&self) -> bool {
        match self {
            ParseError::NoStartMarker | ParseError::NoEndMarker | ParseError::MarkerOrder => true,
            ParseError::NotGistable(inner) => inner.is_not_gistable(),
            _ => false,
        }
    }
}
