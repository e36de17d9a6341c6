use super::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// How an output file is opened when it already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Discard existing content.
    #[default]
    Truncate,
    /// Keep existing content and write after it.
    Append,
}

pub fn open_input(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::open(path, e))
}

pub fn create_output(path: &Path) -> Result<BufWriter<File>, Error> {
    open_output(path, OutputMode::Truncate).map(BufWriter::new)
}

pub fn open_output(path: &Path, mode: OutputMode) -> Result<File, Error> {
    let mut options = OpenOptions::new();
    match mode {
        OutputMode::Truncate => options.write(true).create(true).truncate(true),
        OutputMode::Append => options.append(true).create(true),
    };
    options.open(path).map_err(|e| Error::open(path, e))
}
