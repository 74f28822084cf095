use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gist_parser::{Gist, GistParser, ParseError};
use walkdir::WalkDir;

/// Everything learned from one pass over the candidate files: the assembled
/// records, plus the hard failures that must not be swallowed.
pub struct ScanOutcome {
    pub records: Vec<(PathBuf, Gist)>,
    pub failures: Vec<(PathBuf, ParseError)>,
}

/// Collects every regular file under `dir`.
pub fn files_under(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("could not walk {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Parses each file independently. Files without a valid marker pair are
/// skipped (with a note under `--verbose`); unreadable files are skipped
/// with a note; gistable files with malformed metadata become failures so
/// the caller can report them and fail the run.
pub fn parse_all(paths: &[PathBuf], verbose: bool) -> ScanOutcome {
    let mut outcome = ScanOutcome {
        records: Vec::new(),
        failures: Vec::new(),
    };
    for path in paths {
        match GistParser::new(path).to_gist() {
            Ok(gist) => outcome.records.push((path.clone(), gist)),
            Err(err) if err.is_not_gistable() => {
                if verbose {
                    eprintln!("skipping {}: {}", path.display(), err);
                }
            }
            // A read failure arrives wrapped by record assembly; skip the
            // file, but always say so.
            Err(err @ ParseError::NotGistable(_)) => {
                eprintln!("skipping {}: {}", path.display(), err);
            }
            Err(err) => outcome.failures.push((path.clone(), err)),
        }
    }
    outcome
}
