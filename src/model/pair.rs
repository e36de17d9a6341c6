use super::record::AtomRecord;

/// Model number the first structure is opened as in the distance tool.
pub const FIRST_MODEL: usize = 0;
/// Model number the second structure is opened as in the distance tool.
pub const SECOND_MODEL: usize = 1;

/// The i-th atom record of the first structure paired with the i-th atom
/// record of the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomPair {
    pub first: AtomRecord,
    pub second: AtomRecord,
}

impl AtomPair {
    pub fn new(first: AtomRecord, second: AtomRecord) -> Self {
        Self { first, second }
    }

    /// Pseudobond line: `#0:5.A@CA #1:7.B@CB`.
    pub fn descriptor(&self) -> String {
        format!(
            "{} {}",
            self.first.spec(FIRST_MODEL),
            self.second.spec(SECOND_MODEL)
        )
    }

    /// Distance command line: `distance #0:5.A@CA #1:7.B@CB`.
    pub fn query(&self) -> String {
        format!("distance {}", self.descriptor())
    }

    /// Returns `true` when both records name the same atom in the same kind of
    /// residue.
    pub fn corresponds(&self) -> bool {
        self.first.atom_name == self.second.atom_name
            && self.first.residue_name == self.second.residue_name
    }
}
