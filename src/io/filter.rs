use super::{error::Error, util};
use crate::model::record::is_atom_record;
use std::io::{BufRead, Write};
use std::path::Path;

/// Copies every `ATOM` line from `reader` to `writer`.
///
/// Lines are copied byte for byte, terminators included, so the output is a
/// verbatim subset of the input. Returns the number of lines kept.
pub fn filter_atom_records<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<usize, Error> {
    let mut line = Vec::new();
    let mut kept = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if is_atom_record(&line) {
            writer.write_all(&line)?;
            kept += 1;
        }
    }

    writer.flush()?;
    Ok(kept)
}

/// Writes the `ATOM` lines of `input` to `output`, replacing its content.
pub fn filter_atom_file(input: &Path, output: &Path) -> Result<usize, Error> {
    let reader = util::open_input(input)?;
    let writer = util::create_output(output)?;

    let kept = filter_atom_records(reader, writer)?;
    log::info!(
        "kept {} atom records from {} in {}",
        kept,
        input.display(),
        output.display()
    );

    Ok(kept)
}
