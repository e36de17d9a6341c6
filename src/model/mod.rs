//! Text records that flow between the pipeline stages.
//!
//! - [`record`] – Fixed-column identity fields of a PDB `ATOM` line.
//! - [`pair`] – Positional pairing of two atom records and the tool commands
//!   generated from it.
//! - [`attribute`] – Distance report parsing and the attribute file format.

pub mod attribute;
pub mod pair;
pub mod record;
