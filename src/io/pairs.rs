use super::{error::Error, util};
use crate::model::pair::AtomPair;
use crate::model::record::{AtomRecord, is_atom_record};
use std::io::{BufRead, Write};
use std::path::Path;

/// Counts collected while pairing two atom streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairReport {
    /// Pairs written to both outputs.
    pub pairs: usize,
    /// Line pairs dropped because one side is not an atom record.
    pub skipped: usize,
    /// Written pairs whose atom or residue names differ.
    pub mismatches: usize,
    /// Line number and records of the first such pair.
    pub first_mismatch: Option<(usize, AtomPair)>,
}

/// Pairs the lines of two atom streams by position and writes one
/// pseudobond descriptor and one distance command per pair.
///
/// Iteration stops at the end of the shorter stream. A line pair in which
/// either side does not start with `ATOM` is skipped. Lines are read as raw
/// bytes; only the identity columns of each record need to be valid UTF-8.
pub fn generate_pairs<R1, R2, W1, W2>(
    first: R1,
    second: R2,
    descriptors: W1,
    queries: W2,
) -> Result<PairReport, Error>
where
    R1: BufRead,
    R2: BufRead,
    W1: Write,
    W2: Write,
{
    pair_streams(first, second, descriptors, queries, [None, None])
}

/// File form of [`generate_pairs`]; both outputs are created or truncated.
pub fn generate_pair_files(
    first: &Path,
    second: &Path,
    descriptors: &Path,
    queries: &Path,
) -> Result<PairReport, Error> {
    let reader1 = util::open_input(first)?;
    let reader2 = util::open_input(second)?;
    let descriptor_writer = util::create_output(descriptors)?;
    let query_writer = util::create_output(queries)?;

    let report = pair_streams(
        reader1,
        reader2,
        descriptor_writer,
        query_writer,
        [Some(first), Some(second)],
    )?;

    log::info!(
        "wrote {} atom pairs to {} and {} ({} skipped)",
        report.pairs,
        descriptors.display(),
        queries.display(),
        report.skipped
    );
    if let Some((line_no, pair)) = &report.first_mismatch {
        log::warn!(
            "{} of {} positional pairs join atoms with different names, first at line {} ({} / {}); check that {} and {} list atoms in the same order",
            report.mismatches,
            report.pairs,
            line_no,
            pair.first,
            pair.second,
            first.display(),
            second.display()
        );
    }

    Ok(report)
}
fn pair_streams<R1, R2, W1, W2>(
    mut first: R1,
    mut second: R2,
    mut descriptors: W1,
    mut queries: W2,
    sources: [Option<&Path>; 2],
) -> Result<PairReport, Error>
where
    R1: BufRead,
    R2: BufRead,
    W1: Write,
    W2: Write,
{
    let mut report = PairReport::default();
    let (mut line1, mut line2) = (Vec::new(), Vec::new());
    let mut line_no = 0;

    while next_line(&mut first, &mut line1)? && next_line(&mut second, &mut line2)? {
        line_no += 1;

        if !is_atom_record(&line1) || !is_atom_record(&line2) {
            report.skipped += 1;
            continue;
        }

        let pair = AtomPair::new(
            parse_record(&line1, line_no, 1, sources[0])?,
            parse_record(&line2, line_no, 2, sources[1])?,
        );

        let matched = pair.corresponds();
        if !matched {
            log::debug!(
                "pair {} joins different atoms: {} / {}",
                line_no,
                pair.first,
                pair.second
            );
            report.mismatches += 1;
        }

        writeln!(descriptors, "{}", pair.descriptor())?;
        writeln!(queries, "{}", pair.query())?;
        report.pairs += 1;

        if !matched && report.first_mismatch.is_none() {
            report.first_mismatch = Some((line_no, pair));
        }
    }

    descriptors.flush()?;
    queries.flush()?;
    Ok(report)
}

/// Reads the next line, terminator included, into `buf`. Returns `false` at
/// end of input.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool, Error> {
    buf.clear();
    Ok(reader.read_until(b'\n', buf)? > 0)
}

fn parse_record(
    line: &[u8],
    line_no: usize,
    structure: usize,
    source: Option<&Path>,
) -> Result<AtomRecord, Error> {
    AtomRecord::from_bytes(line).map_err(|e| {
        let err = Error::malformed(line_no, format!("structure {}: {}", structure, e));
        match source {
            Some(path) => err.in_file(path),
            None => err,
        }
    })
}
