//! File stages of the distance pipeline.
//!
//! Each stage has a stream form working on any [`BufRead`](std::io::BufRead)
//! / [`Write`](std::io::Write) pair and a file form that opens the paths,
//! truncating outputs, and logs a one-line summary.
//!
//! - [`filter_atom_file`] – keep the `ATOM` lines of a structure file
//! - [`generate_pair_files`] – pair two filtered files and write the
//!   pseudobond and distance command files
//! - [`transform_distance_file`] – turn a tool transcript into an attribute file

mod attribute;
mod filter;
mod pairs;

pub mod error;
pub mod util;

pub use attribute::{
    AttributeOptions, AttributeReport, transform_distance_file, transform_distances,
};
pub use error::Error;
pub use filter::{filter_atom_file, filter_atom_records};
pub use pairs::{PairReport, generate_pair_files, generate_pairs};
pub use util::OutputMode;
