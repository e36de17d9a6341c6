//! External distance computation.
//!
//! The molecular viewer is run as a plain child process: the executable and
//! every path are passed as separate arguments, never through a shell, and the
//! child's stdout is redirected straight into the transcript file.

use crate::io::{Error, OutputMode, util};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default executable of the distance tool.
pub const DEFAULT_EXECUTABLE: &str = "chimera";
/// Flag that starts the tool without its graphical interface.
pub const DEFAULT_NOGUI_FLAG: &str = "--nogui";

/// How to invoke the external viewer that measures the queried distances.
///
/// # Examples
///
/// ```
/// use pairdist::{DistanceTool, OutputMode};
/// use std::path::Path;
///
/// let tool = DistanceTool::default().output_mode(OutputMode::Append);
/// let cmd = tool.command(Path::new("a.pdb"), Path::new("b.pdb"), Path::new("output.com"));
///
/// assert_eq!(cmd.get_program(), "chimera");
/// assert_eq!(cmd.get_args().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTool {
    pub executable: OsString,
    /// Flag placed before the file arguments; `None` passes no flag.
    pub nogui_flag: Option<String>,
    pub output_mode: OutputMode,
}

impl Default for DistanceTool {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl DistanceTool {
    pub fn new(executable: impl Into<OsString>) -> Self {
        Self {
            executable: executable.into(),
            nogui_flag: Some(DEFAULT_NOGUI_FLAG.to_string()),
            output_mode: OutputMode::Truncate,
        }
    }

    pub fn nogui_flag(mut self, flag: Option<String>) -> Self {
        self.nogui_flag = flag;
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Builds `<tool> [--nogui] <structure1> <structure2> <queries>`.
    pub fn command(&self, structure1: &Path, structure2: &Path, queries: &Path) -> Command {
        let mut cmd = Command::new(&self.executable);
        if let Some(flag) = &self.nogui_flag {
            cmd.arg(flag);
        }
        cmd.arg(structure1).arg(structure2).arg(queries);
        cmd
    }

    /// Runs the tool and blocks until it exits, writing its stdout to
    /// `transcript`.
    ///
    /// The transcript is truncated first unless the tool is configured with
    /// [`OutputMode::Append`]. Stderr is captured and returned inside
    /// [`Error::ToolFailed`] when the tool exits unsuccessfully.
    pub fn run(
        &self,
        structure1: &Path,
        structure2: &Path,
        queries: &Path,
        transcript: &Path,
    ) -> Result<(), Error> {
        let program = self.executable.to_string_lossy().into_owned();
        let sink = util::open_output(transcript, self.output_mode)?;

        let mut cmd = self.command(structure1, structure2, queries);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::from(sink))
            .stderr(Stdio::piped());
        log::debug!("running {:?}", cmd);

        let output = cmd.output().map_err(|source| Error::ToolLaunch {
            program: program.clone(),
            source,
        })?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(Error::ToolFailed {
                program,
                status: output.status,
                stderr,
            });
        }

        if !stderr.is_empty() {
            log::debug!("{} stderr: {}", program, stderr);
        }
        log::info!("{} finished, transcript in {}", program, transcript.display());
        Ok(())
    }
}
