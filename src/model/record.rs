use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Record marker that identifies an atom line in a PDB file.
pub const ATOM_MARKER: &str = "ATOM";

// Zero-based, end-exclusive byte columns of the PDB ATOM record.
const ATOM_NAME: (usize, usize) = (12, 16);
const RESIDUE_NAME: (usize, usize) = (17, 20);
const CHAIN_ID: (usize, usize) = (21, 22);
const RESIDUE_SEQ: (usize, usize) = (22, 26);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("line does not start with the 'ATOM' record marker")]
    NotAnAtom,

    #[error("atom record is {len} bytes long, too short to hold the chain identifier (column 22)")]
    TooShort { len: usize },

    #[error("atom record columns {start}-{end} are not valid text")]
    InvalidColumn { start: usize, end: usize },
}

/// Returns `true` if `line` is tagged as an atom record.
#[inline]
pub fn is_atom_record(line: &[u8]) -> bool {
    line.starts_with(ATOM_MARKER.as_bytes())
}

/// The identity fields of one PDB atom record.
///
/// Every field is kept as trimmed text: the values are only echoed back into
/// tool commands, so residue numbers are never interpreted numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomRecord {
    pub atom_name: String,
    pub residue_name: String,
    pub chain_id: String,
    pub residue_seq: String,
}

impl AtomRecord {
    pub fn new(
        atom_name: impl Into<String>,
        residue_name: impl Into<String>,
        chain_id: impl Into<String>,
        residue_seq: impl Into<String>,
    ) -> Self {
        Self {
            atom_name: atom_name.into(),
            residue_name: residue_name.into(),
            chain_id: chain_id.into(),
            residue_seq: residue_seq.into(),
        }
    }

    /// Atom specification in the `<resseq>.<chain>@<atom>` form, prefixed with
    /// the model number (`#0:5.A@CA`).
    pub fn spec(&self, model: usize) -> String {
        format!(
            "#{}:{}.{}@{}",
            model, self.residue_seq, self.chain_id, self.atom_name
        )
    }

    /// Parses the identity columns of a raw record line.
    ///
    /// Only the fixed identity columns are decoded; bytes elsewhere on the line
    /// (coordinates, element, comments) may hold any encoding. A trailing line
    /// terminator is ignored. A line that ends before the chain identifier
    /// (column 22) is rejected rather than read as a blank chain.
    pub fn from_bytes(line: &[u8]) -> Result<Self, ParseRecordError> {
        if !is_atom_record(line) {
            return Err(ParseRecordError::NotAnAtom);
        }
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.len() < CHAIN_ID.1 {
            return Err(ParseRecordError::TooShort { len: line.len() });
        }

        Ok(Self {
            atom_name: column(line, ATOM_NAME)?,
            residue_name: column(line, RESIDUE_NAME)?,
            chain_id: column(line, CHAIN_ID)?,
            residue_seq: column(line, RESIDUE_SEQ)?,
        })
    }
}

impl fmt::Display for AtomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{}",
            self.atom_name, self.residue_name, self.chain_id, self.residue_seq
        )
    }
}

/// Same rules as [`AtomRecord::from_bytes`]; in particular a 21-character
/// line is [`ParseRecordError::TooShort`], not a record with an empty chain.
impl FromStr for AtomRecord {
    type Err = ParseRecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(line.as_bytes())
    }
}

/// Extracts a trimmed fixed-width column. Columns running past the end of the
/// line are clipped, so short lines yield shorter or empty fields.
fn column(line: &[u8], (start, end): (usize, usize)) -> Result<String, ParseRecordError> {
    let end = end.min(line.len());
    if start >= end {
        return Ok(String::new());
    }
    std::str::from_utf8(&line[start..end])
        .map(|s| s.trim().to_string())
        .map_err(|_| ParseRecordError::InvalidColumn {
            start: start + 1,
            end,
        })
}
