use std::fmt;
use thiserror::Error;

/// Substring that marks a distance report line in the tool output.
pub const DISTANCE_MARKER: &str = "Distance";

/// Leading characters (the `#0` model prefix) dropped from the atom-spec token.
const MODEL_PREFIX_LEN: usize = 2;
const SPEC_TOKEN: usize = 2;
const VALUE_TOKEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "distance line has {found} whitespace-separated fields, at least {min} are required",
    min = VALUE_TOKEN + 1
)]
pub struct ParseDistanceError {
    pub found: usize,
}

/// Header of an attribute assignment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeHeader {
    pub name: String,
    pub recipient: String,
}

impl Default for AttributeHeader {
    fn default() -> Self {
        Self {
            name: "distance".to_string(),
            recipient: "atoms".to_string(),
        }
    }
}

impl fmt::Display for AttributeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "attribute: {}", self.name)?;
        writeln!(f, "recipient: {}", self.recipient)
    }
}

/// One attribute assignment: an atom spec and the distance measured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    pub atom_spec: String,
    pub value: String,
}

impl AttributeRecord {
    /// Builds a record from a tool output line such as
    /// `Distance between #0:5.A@CA and #1:7.B@CB: 3.140`.
    ///
    /// The third field loses its first two characters (the `#0` model prefix)
    /// and the sixth field is taken verbatim as the value.
    pub fn from_distance_line(line: &str) -> Result<Self, ParseDistanceError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= VALUE_TOKEN {
            return Err(ParseDistanceError {
                found: fields.len(),
            });
        }

        Ok(Self {
            atom_spec: fields[SPEC_TOKEN]
                .chars()
                .skip(MODEL_PREFIX_LEN)
                .collect(),
            value: fields[VALUE_TOKEN].to_string(),
        })
    }
}

impl fmt::Display for AttributeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}\t{}", self.atom_spec, self.value)
    }
}

/// Returns `true` if the line reports a distance.
#[inline]
pub fn is_distance_line(line: &str) -> bool {
    line.contains(DISTANCE_MARKER)
}
