// crates/gist_parser/src/lib.rs

//! Scans a source file for an embedded, marker-delimited gist section and
//! assembles the normalized record the upload collaborator consumes.
//!
//! A gistable file carries the case-insensitive substrings `start gist` and
//! `end gist` on separate lines, in that order. Metadata (`author:`,
//! `description:`, `public:`) lives between the markers, one field per line;
//! the uploaded content is the whole file, not the marker span.
//!
//! ```text
//! /* start gist
//! Author: Jane <j@x.com>
//! Description: demo snippet
//! Public: true
//! end gist */
//! print(1)
//! ```

mod content;
mod error;
mod record;
mod scan;

pub use content::{field_value, parse_bool_token, tail_slice};
pub use error::ParseError;
pub use record::{Gist, GistFileBody};
pub use scan::{locate_markers, split_lines, MarkerSpan, END_MARKER, START_MARKER};

use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Parses one file for an embedded gist section. Each instance owns the
/// contents of a single file, read lazily and cached for the lifetime of the
/// parser; nothing is shared between instances, so parsing the same file
/// with two parsers yields identical records.
pub struct GistParser {
    filepath: PathBuf,
    contents: OnceCell<Vec<u8>>,
}

impl GistParser {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        GistParser {
            filepath: filepath.into(),
            contents: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.filepath
    }

    /// The whole file as bytes, read once and cached. Binary files are
    /// accepted here; they fail later, at the marker scan.
    fn contents(&self) -> Result<&[u8], ParseError> {
        self.contents
            .get_or_try_init(|| {
                fs::read(&self.filepath).map_err(|source| ParseError::Io {
                    path: self.filepath.clone(),
                    source,
                })
            })
            .map(Vec::as_slice)
    }

    fn text(&self) -> Result<Cow<'_, str>, ParseError> {
        Ok(String::from_utf8_lossy(self.contents()?))
    }

    /// Checks that the file carries a correctly ordered marker pair.
    pub fn is_gistable(&self) -> Result<(), ParseError> {
        let text = self.text()?;
        let lines = split_lines(&text);
        locate_markers(&lines).map(|_| ())
    }

    /// The trimmed lines from the resolved start marker through the end
    /// marker, inclusive. This is where all gist metadata lives.
    pub fn gist_lines(&self) -> Result<Vec<String>, ParseError> {
        let text = self.text()?;
        let lines = split_lines(&text);
        let span = locate_markers(&lines)?;
        Ok(lines[span.start..=span.end].to_vec())
    }

    /// The `author:` field. Informational only; it is not part of the
    /// uploaded record.
    pub fn author(&self) -> Result<String, ParseError> {
        field_value(&self.gist_lines()?, "author")
    }

    /// The mandatory `description:` field. Values never span lines, so a
    /// multi-line description keeps only its first line.
    pub fn description(&self) -> Result<String, ParseError> {
        field_value(&self.gist_lines()?, "description")
    }

    /// The `public:` field. Gists are public unless the file says otherwise:
    /// an absent field resolves to `true`, but a present value that is not a
    /// recognized boolean token is an error, never a default.
    pub fn public(&self) -> Result<bool, ParseError> {
        let value = match field_value(&self.gist_lines()?, "public") {
            Ok(value) => value,
            Err(ParseError::FieldNotFound { .. }) => return Ok(true),
            Err(err) => return Err(err),
        };
        parse_bool_token(&value).ok_or_else(|| ParseError::BooleanParse {
            key: "public".to_string(),
            value,
        })
    }

    /// The uploaded body: the entire original file content.
    pub fn file_body(&self) -> Result<GistFileBody, ParseError> {
        Ok(GistFileBody {
            filename: None,
            content: self.text()?.into_owned(),
        })
    }

    /// Assembles the full record: gistability check, then description,
    /// public flag, and body, short-circuiting on the first failure.
    pub fn to_gist(&self) -> Result<Gist, ParseError> {
        self.is_gistable()
            .map_err(|err| ParseError::NotGistable(Box::new(err)))?;

        let description = self.description()?;
        let public = self.public()?;
        let body = self.file_body()?;

        Ok(Gist {
            description,
            public,
            files: vec![body],
        })
    }
}
