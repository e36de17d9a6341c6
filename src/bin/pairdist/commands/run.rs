use std::path::Path;

use anyhow::{Context, Result};

use pairdist::io::{filter_atom_file, generate_pair_files, transform_distance_file};
use pairdist::{Error, FilePaths, OutputMode};

use crate::cli::Cli;
use crate::config::build_pipeline_config;
use crate::display::{Context as DisplayContext, Progress, RunSummary, print_run_summary};
use crate::io::ensure_dir;

const TOTAL_STEPS: u8 = 4;

pub fn run(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let config = build_pipeline_config(&cli)?;
    ensure_dir(&cli.io.workdir)?;
    let paths = config.files.resolve(&cli.io.workdir);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Filtering atom records");
    let atoms1 = filter_structure(&cli.structure1, &paths.filtered1)?;
    let atoms2 = filter_structure(&cli.structure2, &paths.filtered2)?;
    let filter_substeps = [
        filter_substep(&cli.structure1, &paths.filtered1, atoms1),
        filter_substep(&cli.structure2, &paths.filtered2, atoms2),
    ];
    progress.complete_step(
        "Filtering atom records",
        &[filter_substeps[0].as_str(), filter_substeps[1].as_str()],
    );

    progress.step("Pairing atoms");
    let pairs = generate_pair_files(
        &paths.filtered1,
        &paths.filtered2,
        &paths.pseudobonds,
        &paths.commands,
    )
    .with_context(|| {
        format!(
            "Failed to pair {} with {}",
            paths.filtered1.display(),
            paths.filtered2.display()
        )
    })?;
    if pairs.pairs == 0 {
        return Err(Error::empty_stage("pair generator", &paths.commands).into());
    }
    let pair_substeps = build_pair_substeps(&paths, pairs.pairs, pairs.skipped, pairs.mismatches);
    let pair_substeps_ref: Vec<&str> = pair_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Pairing atoms", &pair_substeps_ref);

    progress.step("Measuring distances");
    let tool = config.distance_tool();
    tool.run(
        &cli.structure1,
        &cli.structure2,
        &paths.commands,
        &paths.distances,
    )
    .with_context(|| {
        format!(
            "Distance computation failed for {}",
            paths.commands.display()
        )
    })?;
    let mode = match tool.output_mode {
        OutputMode::Truncate => "replaced",
        OutputMode::Append => "appended",
    };
    let tool_substep = format!("Transcript {} → {}", mode, file_name(&paths.distances));
    progress.complete_step("Measuring distances", &[tool_substep.as_str()]);

    progress.step("Writing attributes");
    let attributes = transform_distance_file(
        &paths.distances,
        &paths.attributes,
        &config.attribute_options(),
    )
    .with_context(|| format!("Failed to transform {}", paths.distances.display()))?;
    let mut attribute_substeps = vec![format!(
        "Write {} distance(s) → {}",
        attributes.records,
        file_name(&paths.attributes)
    )];
    if attributes.skipped > 0 {
        attribute_substeps.push(format!(
            "Skipped {} malformed line(s)",
            attributes.skipped
        ));
    }
    let attribute_substeps_ref: Vec<&str> =
        attribute_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing attributes", &attribute_substeps_ref);

    progress.finish();

    if ctx.interactive {
        print_run_summary(&RunSummary {
            atoms1,
            atoms2,
            pairs,
            attributes,
            attribute_file: &paths.attributes,
        });
    }

    Ok(())
}

fn filter_structure(input: &Path, output: &Path) -> Result<usize> {
    let kept = filter_atom_file(input, output)
        .with_context(|| format!("Failed to filter atom records from {}", input.display()))?;
    if kept == 0 {
        return Err(Error::empty_stage("atom filter", output).into());
    }
    Ok(kept)
}

fn filter_substep(input: &Path, output: &Path, kept: usize) -> String {
    format!(
        "{} → {} ({} atoms)",
        file_name(input),
        file_name(output),
        kept
    )
}

fn build_pair_substeps(
    paths: &FilePaths,
    pairs: usize,
    skipped: usize,
    mismatches: usize,
) -> Vec<String> {
    let mut steps = vec![
        format!("Write {} pseudobond(s) → {}", pairs, file_name(&paths.pseudobonds)),
        format!("Write {} distance command(s) → {}", pairs, file_name(&paths.commands)),
    ];
    if skipped > 0 {
        steps.push(format!("Skipped {} non-atom line pair(s)", skipped));
    }
    if mismatches > 0 {
        steps.push(format!(
            "{} pair(s) join differently named atoms",
            mismatches
        ));
    }
    steps
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn pair_substeps_only_mention_problems_when_present() {
        let paths = pairdist::FileNames::default().resolve(Path::new("run"));
        assert_eq!(build_pair_substeps(&paths, 3, 0, 0).len(), 2);

        let steps = build_pair_substeps(&paths, 3, 1, 2);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], "Write 3 pseudobond(s) → Pseudobond.pd");
        assert_eq!(steps[3], "2 pair(s) join differently named atoms");
    }

    #[test]
    fn file_name_falls_back_to_whole_path() {
        assert_eq!(file_name(&PathBuf::from("/tmp/run/output.com")), "output.com");
        assert_eq!(file_name(&PathBuf::from("..")), "..");
    }

    #[cfg(unix)]
    mod pipeline {
        use super::*;
        use clap::Parser;
        use std::ffi::OsString;
        use std::fs;

        const CA_ALA: &str =
            "ATOM      1  CA  ALA A   5      11.104   6.134  -6.504  1.00  0.00           C\n";
        const HOH: &str =
            "HETATM    1  O   HOH A 101       1.000   1.000   1.000  1.00  0.00           O\n";

        struct Workspace {
            dir: tempfile::TempDir,
        }

        impl Workspace {
            fn new(structure1: &str, structure2: &str, viewer: &str) -> Self {
                let dir = tempfile::tempdir().unwrap();
                fs::write(dir.path().join("s1.pdb"), structure1).unwrap();
                fs::write(dir.path().join("s2.pdb"), structure2).unwrap();
                fs::write(dir.path().join("viewer.sh"), viewer).unwrap();
                Self { dir }
            }

            fn path(&self, name: &str) -> PathBuf {
                self.dir.path().join(name)
            }

            // `sh viewer.sh s1 s2 output.com` stands in for the viewer.
            fn run(&self) -> Result<()> {
                let args: Vec<OsString> = vec![
                    "pairdist".into(),
                    self.path("s1.pdb").into(),
                    self.path("s2.pdb").into(),
                    "--workdir".into(),
                    self.path("out").into(),
                    "--tool".into(),
                    "sh".into(),
                    "--nogui-flag".into(),
                    self.path("viewer.sh").into(),
                ];
                let cli = Cli::try_parse_from(args).unwrap();
                run(cli, DisplayContext { interactive: false })
            }
        }

        #[test]
        fn writes_attribute_file_from_viewer_output() {
            let ws = Workspace::new(
                CA_ALA,
                CA_ALA,
                "echo 'Distance between #0:5.A@CA and #1:5.A@CA: 1.234'\n",
            );

            ws.run().unwrap();

            assert_eq!(
                fs::read_to_string(ws.path("out/output.com")).unwrap(),
                "distance #0:5.A@CA #1:5.A@CA\n"
            );
            assert_eq!(
                fs::read_to_string(ws.path("out/attribute.txt")).unwrap(),
                "attribute: distance\nrecipient: atoms\n\t:5.A@CA\t1.234\n"
            );
        }

        #[test]
        fn structure_without_atoms_halts_before_pairing() {
            let ws = Workspace::new(HOH, CA_ALA, "echo unreachable\n");

            let err = ws.run().unwrap_err();

            match err.downcast_ref::<Error>() {
                Some(Error::EmptyStage { stage, path }) => {
                    assert_eq!(*stage, "atom filter");
                    assert_eq!(path, &ws.path("out/output1.pdb"));
                }
                other => panic!("unexpected error: {:?}", other),
            }
            assert!(!ws.path("out/Pseudobond.pd").exists());
            assert!(!ws.path("out/distances.txt").exists());
        }

        #[test]
        fn failing_viewer_halts_before_attributes() {
            let ws = Workspace::new(CA_ALA, CA_ALA, "echo 'no such model' >&2\nexit 2\n");

            let err = ws.run().unwrap_err();

            match err.downcast_ref::<Error>() {
                Some(Error::ToolFailed { status, stderr, .. }) => {
                    assert_eq!(status.code(), Some(2));
                    assert_eq!(stderr, "no such model");
                }
                other => panic!("unexpected error: {:?}", other),
            }
            assert!(err.to_string().contains("output.com"));
            assert!(!ws.path("out/attribute.txt").exists());
        }

        #[test]
        fn malformed_transcript_error_names_the_transcript() {
            let ws = Workspace::new(CA_ALA, CA_ALA, "echo 'Distance oops'\n");

            let err = ws.run().unwrap_err();

            assert!(err.to_string().contains("distances.txt"), "{err}");
            assert!(matches!(
                err.downcast_ref::<Error>(),
                Some(Error::MalformedLine { line: 1, .. })
            ));
        }
    }
}
