use super::{error::Error, util};
use crate::model::attribute::{AttributeHeader, AttributeRecord, is_distance_line};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct AttributeOptions {
    pub header: AttributeHeader,
    /// Skip distance lines with too few fields instead of failing.
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeReport {
    pub records: usize,
    pub skipped: usize,
}

/// Converts the distance lines of a tool transcript into attribute records.
///
/// The header is always written, even when no line matches.
pub fn transform_distances<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &AttributeOptions,
) -> Result<AttributeReport, Error> {
    let mut report = AttributeReport::default();
    write!(writer, "{}", options.header)?;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !is_distance_line(&line) {
            continue;
        }

        match AttributeRecord::from_distance_line(&line) {
            Ok(record) => {
                writeln!(writer, "{}", record)?;
                report.records += 1;
            }
            Err(e) if options.skip_malformed => {
                log::warn!("skipping distance line {}: {}", index + 1, e);
                report.skipped += 1;
            }
            Err(e) => {
                writer.flush()?;
                return Err(Error::malformed(
                    index + 1,
                    format!("{} in '{}'", e, line.trim()),
                ));
            }
        }
    }

    writer.flush()?;
    Ok(report)
}

/// File form of [`transform_distances`]; `output` is overwritten.
pub fn transform_distance_file(
    input: &Path,
    output: &Path,
    options: &AttributeOptions,
) -> Result<AttributeReport, Error> {
    let reader = util::open_input(input)?;
    let writer = util::create_output(output)?;

    let report = transform_distances(reader, writer, options).map_err(|e| e.in_file(input))?;

    if report.records == 0 {
        log::warn!("no distance lines found in {}", input.display());
    } else {
        log::info!(
            "wrote {} distance attributes to {}",
            report.records,
            output.display()
        );
    }

    Ok(report)
}
