use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod delimited;
pub mod roster;
pub mod rubric;

pub use roster::parse_roster;
pub use rubric::parse_rubric;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path} is not valid UTF-8")]
    Encoding { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(std::io::stdin()));
    }
    let file = BufReader::new(File::open(path)?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn read_text(path: &Path) -> Result<String, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = String::from_utf8(bytes).map_err(|_| InputError::Encoding {
        path: path.display().to_string(),
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "input read");

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
