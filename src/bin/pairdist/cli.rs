use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(
    name = "pairdist",
    about = "Per-atom distances between two PDB structures, as a Chimera attribute file",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// First structure (PDB), opened as model #0
    #[arg(value_name = "STRUCTURE1")]
    pub structure1: PathBuf,

    /// Second structure (PDB), opened as model #1
    #[arg(value_name = "STRUCTURE2")]
    pub structure2: PathBuf,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub tool: ToolOptions,

    #[command(flatten)]
    pub attribute: AttributeOptions,
}

#[derive(Args)]
pub struct IoOptions {
    /// Directory for the generated files
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Pipeline configuration (TOML file)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Distance Tool")]
pub struct ToolOptions {
    /// Viewer executable used to measure distances
    #[arg(long = "tool", value_name = "EXE")]
    pub executable: Option<String>,

    /// Flag that disables the viewer GUI ("" to pass none)
    #[arg(long = "nogui-flag", value_name = "FLAG", allow_hyphen_values = true)]
    pub nogui_flag: Option<String>,

    /// Append to the distance transcript instead of replacing it
    #[arg(long)]
    pub append: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Attribute Output")]
pub struct AttributeOptions {
    /// Attribute name written to the header
    #[arg(long = "attr-name", value_name = "NAME")]
    pub name: Option<String>,

    /// Attribute recipient written to the header
    #[arg(long = "attr-recipient", value_name = "LEVEL")]
    pub recipient: Option<String>,

    /// Skip distance lines with too few fields instead of failing
    #[arg(long)]
    pub skip_malformed: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn two_positionals_are_required() {
        assert!(Cli::try_parse_from(["pairdist", "a.pdb"]).is_err());
        assert!(Cli::try_parse_from(["pairdist", "a.pdb", "b.pdb", "c.pdb"]).is_err());
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["pairdist", "a.pdb", "b.pdb"]).unwrap();
        assert_eq!(cli.structure1, PathBuf::from("a.pdb"));
        assert_eq!(cli.structure2, PathBuf::from("b.pdb"));
        assert_eq!(cli.io.workdir, PathBuf::from("."));
        assert!(cli.io.config.is_none());
        assert!(cli.tool.executable.is_none());
        assert!(cli.tool.nogui_flag.is_none());
        assert!(!cli.tool.append);
        assert!(!cli.attribute.skip_malformed);
    }

    #[test]
    fn nogui_flag_accepts_dashes() {
        let cli =
            Cli::try_parse_from(["pairdist", "a.pdb", "b.pdb", "--nogui-flag", "--silent"]).unwrap();
        assert_eq!(cli.tool.nogui_flag.as_deref(), Some("--silent"));
    }
}
