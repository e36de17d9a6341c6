use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

/// Lines of tool stderr shown in the error panel.
const STDERR_TAIL: usize = 6;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = write_error(&mut stderr, err);
}

#[rustfmt::skip]
fn write_error(out: &mut impl Write, err: &Error) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "   ╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "   ║  ✗ Error                                                     ║")?;
    writeln!(out, "   ╟──────────────────────────────────────────────────────────────╢")?;

    for line in wrap(&err.to_string(), 59) {
        writeln!(out, "   ║  {:<59} ║", line)?;
    }

    for cause in err.chain().skip(1) {
        writeln!(out, "   ╟──────────────────────────────────────────────────────────────╢")?;
        writeln!(out, "   ║  Caused by:                                                  ║")?;
        for line in wrap(&cause.to_string(), 57) {
            writeln!(out, "   ║    {:<57} ║", line)?;
        }
    }

    if let Some(tail) = tool_stderr_tail(err) {
        writeln!(out, "   ╟──────────────────────────────────────────────────────────────╢")?;
        writeln!(out, "   ║  Tool stderr:                                                ║")?;
        for line in tail.iter().flat_map(|l| wrap(l, 57)) {
            writeln!(out, "   ║    {:<57} ║", line)?;
        }
    }

    if let Some(hints) = collect_hints(err) {
        writeln!(out, "   ╟──────────────────────────────────────────────────────────────╢")?;
        writeln!(out, "   ║  Hints:                                                      ║")?;
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                writeln!(out, "   ║    • {:<55} ║", first)?;
                for line in rest {
                    writeln!(out, "   ║      {:<55} ║", line)?;
                }
            }
        }
    }

    writeln!(out, "   ╚══════════════════════════════════════════════════════════════╝")?;
    writeln!(out)
}

fn tool_stderr_tail(err: &Error) -> Option<Vec<String>> {
    let Some(pairdist::Error::ToolFailed { stderr, .. }) = err.downcast_ref::<pairdist::Error>()
    else {
        return None;
    };

    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return None;
    }
    let start = lines.len().saturating_sub(STDERR_TAIL);
    Some(lines[start..].iter().map(|l| l.to_string()).collect())
}

/// Hints for the error panel; typed pipeline errors get specific advice, other
/// errors are matched on their message text.
fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let hints = match err.downcast_ref::<pairdist::Error>() {
        Some(pipeline_err) => pipeline_hints(pipeline_err),
        None => message_hints(&error_chain_text(err)),
    };
    (!hints.is_empty()).then_some(hints)
}

fn pipeline_hints(err: &pairdist::Error) -> Vec<String> {
    use pairdist::Error as PipelineError;

    match err {
        PipelineError::Open { source, .. } | PipelineError::Io { source } => io_hints(source),

        PipelineError::ToolLaunch { program, source } if source.kind() == io::ErrorKind::NotFound => vec![
            format!("'{program}' was not found on PATH"),
            "Install UCSF Chimera or pass its full path with --tool".into(),
        ],

        PipelineError::ToolLaunch { program, source } => {
            let mut hints = vec![format!("'{program}' could not be started")];
            hints.extend(io_hints(source));
            hints
        }

        PipelineError::ToolFailed { program, .. } => vec![
            format!("'{program}' rejected the structures or the command file"),
            "Run the same command by hand to see the full tool output".into(),
            "Check that both structures open in the viewer on their own".into(),
        ],

        PipelineError::MalformedLine { path, line, .. } => vec![
            match path {
                Some(path) => format!("Inspect line {line} of {}", path.display()),
                None => format!("Inspect line {line} of the input named above"),
            },
            "Distance lines need at least 6 whitespace-separated fields".into(),
            "Use --skip-malformed to drop such lines and continue".into(),
            "Atom records need at least 22 columns (through the chain ID)".into(),
        ],

        PipelineError::EmptyStage { stage, .. } => vec![
            format!("The {stage} found nothing to pass on"),
            "Check that both inputs are PDB files with ATOM records".into(),
            "HETATM-only structures (ligands, waters) have no ATOM lines".into(),
        ],

        PipelineError::Config(_) => vec![
            "Configuration sections are [files], [tool] and [attribute]".into(),
            "Check for misspelled keys and missing quotes around strings".into(),
        ],
    }
}

fn io_hints(source: &io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    let hints: &[&str] = match source.kind() {
        ErrorKind::NotFound => &[
            "File or directory not found",
            "Check the path spelling and ensure the file exists",
        ],
        ErrorKind::PermissionDenied => &[
            "Permission denied accessing the file",
            "Ensure the working directory (--workdir) is writable",
        ],
        ErrorKind::InvalidData => &[
            "File is not valid UTF-8 text",
            "Verify the input is a plain-text PDB file, not compressed",
        ],
        ErrorKind::WriteZero | ErrorKind::StorageFull => &[
            "Failed to write data (disk full?)",
            "Check available disk space",
        ],
        _ => &["Check file path, permissions, and disk space"],
    };
    hints.iter().map(|h| h.to_string()).collect()
}

fn message_hints(msg: &str) -> Vec<String> {
    let hints: &[&str] = if msg.contains("no such file") || msg.contains("not found") {
        &[
            "Check that the file path is correct",
            "Verify the file exists and is readable",
        ]
    } else if msg.contains("permission denied") {
        &["Check file permissions with `ls -la`"]
    } else {
        &[]
    };
    hints.iter().map(|h| h.to_string()).collect()
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    fn render(err: &Error) -> String {
        let mut out = Vec::new();
        write_error(&mut out, err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_message_and_causes() {
        let err = Err::<(), _>(pairdist::Error::open(
            PathBuf::from("missing.pdb"),
            io::Error::from(io::ErrorKind::NotFound),
        ))
        .context("Failed to filter atom records from missing.pdb")
        .unwrap_err();

        let text = render(&err);
        assert!(text.contains("Failed to filter atom records"));
        assert!(text.contains("Caused by:"));
        assert!(text.contains("missing.pdb"));
        assert!(text.contains("File or directory not found"));
    }

    #[test]
    fn missing_tool_suggests_path_flag() {
        let err = Error::from(pairdist::Error::ToolLaunch {
            program: "chimera".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        });

        let hints = collect_hints(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains("--tool")));
    }

    #[test]
    fn malformed_line_suggests_skipping() {
        let err = Error::from(pairdist::Error::malformed(4, "too few fields"));
        let hints = collect_hints(&err).unwrap();
        assert!(hints[0].contains("line 4"));
        assert!(hints.iter().any(|h| h.contains("--skip-malformed")));
    }

    #[test]
    fn malformed_line_hint_names_the_file() {
        let err = Err::<(), _>(
            pairdist::Error::malformed(2, "too few fields").in_file("run/distances.txt"),
        )
        .context("Failed to transform run/distances.txt")
        .unwrap_err();

        let hints = collect_hints(&err).unwrap();
        assert_eq!(hints[0], "Inspect line 2 of run/distances.txt");
        assert!(render(&err).contains("malformed line 2 of 'run/distances.txt'"));
    }

    #[test]
    fn untyped_errors_fall_back_to_message_hints() {
        let err = anyhow::anyhow!("Permission denied while reading");
        let hints = collect_hints(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains("ls -la")));

        assert!(collect_hints(&anyhow::anyhow!("something else")).is_none());
    }

    #[test]
    fn panel_lines_have_constant_width() {
        let err = Error::from(pairdist::Error::empty_stage(
            "atom filter",
            PathBuf::from("/data/runs/output1.pdb"),
        ));

        let text = render(&err);
        let widths: Vec<usize> = text
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
    }
}
