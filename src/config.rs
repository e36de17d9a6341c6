//! Pipeline configuration.
//!
//! [`PipelineConfig`] names the generated files, selects the distance tool and
//! shapes the attribute output. Every field has a default, so a TOML file only
//! needs the keys it changes:
//!
//! ```
//! use pairdist::PipelineConfig;
//!
//! let config = PipelineConfig::from_toml_str(r#"
//!     [tool]
//!     executable = "/opt/UCSF/Chimera64/bin/chimera"
//!     append = true
//! "#)?;
//!
//! assert_eq!(config.files.distances, "distances.txt");
//! assert!(config.tool.append);
//! # Ok::<(), pairdist::Error>(())
//! ```

use crate::io::{AttributeOptions, Error, OutputMode};
use crate::model::attribute::AttributeHeader;
use crate::tool::{DEFAULT_EXECUTABLE, DEFAULT_NOGUI_FLAG, DistanceTool};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub files: FileNames,
    pub tool: ToolSettings,
    pub attribute: AttributeSettings,
}

impl PipelineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    pub fn distance_tool(&self) -> DistanceTool {
        let flag = Some(self.tool.nogui_flag.clone()).filter(|f| !f.is_empty());
        let mode = if self.tool.append {
            OutputMode::Append
        } else {
            OutputMode::Truncate
        };
        DistanceTool::new(&self.tool.executable)
            .nogui_flag(flag)
            .output_mode(mode)
    }

    pub fn attribute_options(&self) -> AttributeOptions {
        AttributeOptions {
            header: AttributeHeader {
                name: self.attribute.name.clone(),
                recipient: self.attribute.recipient.clone(),
            },
            skip_malformed: self.attribute.skip_malformed,
        }
    }
}

/// File names of the intermediate and final pipeline outputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileNames {
    pub filtered1: String,
    pub filtered2: String,
    pub pseudobonds: String,
    pub commands: String,
    pub distances: String,
    pub attributes: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            filtered1: "output1.pdb".to_string(),
            filtered2: "output2.pdb".to_string(),
            pseudobonds: "Pseudobond.pd".to_string(),
            commands: "output.com".to_string(),
            distances: "distances.txt".to_string(),
            attributes: "attribute.txt".to_string(),
        }
    }
}

impl FileNames {
    pub fn resolve(&self, dir: &Path) -> FilePaths {
        FilePaths {
            filtered1: dir.join(&self.filtered1),
            filtered2: dir.join(&self.filtered2),
            pseudobonds: dir.join(&self.pseudobonds),
            commands: dir.join(&self.commands),
            distances: dir.join(&self.distances),
            attributes: dir.join(&self.attributes),
        }
    }
}

/// [`FileNames`] joined onto a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePaths {
    pub filtered1: PathBuf,
    pub filtered2: PathBuf,
    pub pseudobonds: PathBuf,
    pub commands: PathBuf,
    pub distances: PathBuf,
    pub attributes: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSettings {
    pub executable: String,
    /// An empty string passes no flag.
    pub nogui_flag: String,
    /// Append to the transcript instead of replacing it.
    pub append: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            nogui_flag: DEFAULT_NOGUI_FLAG.to_string(),
            append: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeSettings {
    pub name: String,
    pub recipient: String,
    pub skip_malformed: bool,
}

impl Default for AttributeSettings {
    fn default() -> Self {
        let header = AttributeHeader::default();
        Self {
            name: header.name,
            recipient: header.recipient,
            skip_malformed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.files.filtered1, "output1.pdb");
        assert_eq!(config.files.filtered2, "output2.pdb");
        assert_eq!(config.files.pseudobonds, "Pseudobond.pd");
        assert_eq!(config.files.commands, "output.com");
        assert_eq!(config.files.distances, "distances.txt");
        assert_eq!(config.files.attributes, "attribute.txt");
        assert_eq!(config.tool.executable, "chimera");
        assert_eq!(config.tool.nogui_flag, "--nogui");
        assert!(!config.tool.append);
        assert_eq!(config.attribute.name, "distance");
        assert_eq!(config.attribute.recipient, "atoms");
        assert!(!config.attribute.skip_malformed);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            PipelineConfig::from_toml_str("").unwrap(),
            PipelineConfig::default()
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [files]
            attributes = "ca_distances.defattr"

            [attribute]
            skip_malformed = true
            "#,
        )
        .unwrap();

        assert_eq!(config.files.attributes, "ca_distances.defattr");
        assert_eq!(config.files.commands, "output.com");
        assert!(config.attribute.skip_malformed);
        assert_eq!(config.attribute.name, "distance");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = PipelineConfig::from_toml_str("[tool]\nexe = \"chimera\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn distance_tool_from_settings() {
        let mut config = PipelineConfig::default();
        assert_eq!(config.distance_tool(), DistanceTool::default());

        config.tool.nogui_flag.clear();
        config.tool.append = true;
        let tool = config.distance_tool();
        assert_eq!(tool.nogui_flag, None);
        assert_eq!(tool.output_mode, OutputMode::Append);
    }

    #[test]
    fn resolve_joins_directory() {
        let paths = FileNames::default().resolve(Path::new("/tmp/run"));
        assert_eq!(paths.filtered1, PathBuf::from("/tmp/run/output1.pdb"));
        assert_eq!(paths.attributes, PathBuf::from("/tmp/run/attribute.txt"));
    }
}
