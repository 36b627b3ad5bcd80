use crate::errors::AppResult;
use serde_json::Value as Json;
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    GenericIo(#[from] io::Error),
    #[error("Invalid data in {0}: {1}")]
    InvalidData(String, String),
}

fn classify(path: &Path, err: io::Error) -> IoError {
    match err.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.display().to_string()),
        io::ErrorKind::InvalidData => IoError::InvalidData(path.display().to_string(), err.to_string()),
        _ => IoError::GenericIo(err),
    }
}

/// Reads a whole text file.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|e| classify(path, e))
}

/// Reads the text to wrap from `path`, or from stdin when no path is given.
pub fn read_text(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Loads template data from a JSON file. Without a file the data is an
/// empty object.
pub fn read_data(path: Option<&Path>) -> AppResult<Json> {
    let Some(path) = path else {
        return Ok(Json::Object(Default::default()));
    };

    let file = File::open(path).map_err(|e| classify(path, e))?;
    let reader = BufReader::new(file);
    let data = serde_json::from_reader(reader)?;
    Ok(data)
}

/// Writes rendered output to `path`, or to stdout followed by a newline.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), IoError> {
    match path {
        Some(path) => fs::write(path, content).map_err(|e| classify(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
