use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to launch distance tool '{program}': {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("distance tool '{program}' exited with {status}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("malformed line {line}{}: {details}", in_path(.path))]
    MalformedLine {
        path: Option<PathBuf>,
        line: usize,
        details: String,
    },

    #[error("{stage} produced no usable output in '{}'", .path.display())]
    EmptyStage { stage: &'static str, path: PathBuf },

    #[error("failed to parse pipeline configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedLine {
            path: None,
            line,
            details: details.into(),
        }
    }

    /// Attaches `path` to a [`Error::MalformedLine`] that has none yet.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::MalformedLine {
                path: None,
                line,
                details,
            } => Self::MalformedLine {
                path: Some(path.into()),
                line,
                details,
            },
            other => other,
        }
    }

    pub fn empty_stage(stage: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::EmptyStage {
            stage,
            path: path.into(),
        }
    }
}

fn in_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" of '{}'", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_names_its_file_once_known() {
        let err = Error::malformed(2, "too few fields");
        assert_eq!(err.to_string(), "malformed line 2: too few fields");

        let err = err.in_file("run/distances.txt");
        assert_eq!(
            err.to_string(),
            "malformed line 2 of 'run/distances.txt': too few fields"
        );

        let err = err.in_file("other.txt");
        assert!(err.to_string().contains("run/distances.txt"));
    }

    #[test]
    fn in_file_leaves_other_errors_alone() {
        let err = Error::empty_stage("atom filter", "output1.pdb").in_file("x.txt");
        assert!(matches!(err, Error::EmptyStage { .. }));
    }
}
