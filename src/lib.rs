//! Pairwise atom distances between two PDB structures, measured by an external
//! molecular viewer and written as a viewer attribute file.
//!
//! The pipeline has four stages, each reading the files the previous one wrote:
//!
//! 1. **Atom filter**: keep the `ATOM` lines of each structure
//!    ([`io::filter_atom_file`])
//! 2. **Pair generator**: pair the filtered atoms by position and write a
//!    pseudobond file and a distance command file ([`io::generate_pair_files`])
//! 3. **Distance computation**: run the viewer without its GUI on both
//!    structures and the command file ([`DistanceTool::run`])
//! 4. **Attribute transform**: turn the reported distances into an attribute
//!    file ([`io::transform_distance_file`])
//!
//! # Quick Start
//!
//! The text stages also work on in-memory streams:
//!
//! ```
//! use pairdist::io::{AttributeOptions, generate_pairs, transform_distances};
//!
//! let first = "ATOM      1  CA  ALA A   5      11.104   6.134  -6.504  1.00  0.00\n";
//! let second = "ATOM      1  CB  GLY B   7      11.639   6.071  -5.147  1.00  0.00\n";
//!
//! let mut pseudobonds = Vec::new();
//! let mut commands = Vec::new();
//! let report = generate_pairs(first.as_bytes(), second.as_bytes(), &mut pseudobonds, &mut commands)?;
//!
//! assert_eq!(report.pairs, 1);
//! assert_eq!(String::from_utf8_lossy(&commands), "distance #0:5.A@CA #1:7.B@CB\n");
//!
//! let transcript = "Distance between #0:5.A@CA and #1:7.B@CB: 3.140\n";
//! let mut attributes = Vec::new();
//! transform_distances(transcript.as_bytes(), &mut attributes, &AttributeOptions::default())?;
//!
//! assert_eq!(
//!     String::from_utf8_lossy(&attributes),
//!     "attribute: distance\nrecipient: atoms\n\t:5.A@CA\t3.140\n"
//! );
//! # Ok::<(), pairdist::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – The three file stages, output modes, and the [`Error`] type
//! - [`DistanceTool`] – The external viewer invocation
//! - [`PipelineConfig`] – File names, tool and attribute settings (TOML)
//!
//! # Data Types
//!
//! - [`AtomRecord`] – Identity columns of one `ATOM` line
//! - [`AtomPair`] – Positional pair with its pseudobond and command lines
//! - [`AttributeRecord`] / [`AttributeHeader`] – Attribute file contents

mod config;
mod model;
mod tool;

pub mod io;

pub use config::{AttributeSettings, FileNames, FilePaths, PipelineConfig, ToolSettings};
pub use io::{Error, OutputMode};
pub use model::attribute::{
    AttributeHeader, AttributeRecord, DISTANCE_MARKER, ParseDistanceError, is_distance_line,
};
pub use model::pair::AtomPair;
pub use model::record::{ATOM_MARKER, AtomRecord, ParseRecordError, is_atom_record};
pub use tool::{DEFAULT_EXECUTABLE, DEFAULT_NOGUI_FLAG, DistanceTool};
